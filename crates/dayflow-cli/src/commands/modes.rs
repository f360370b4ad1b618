use clap::Subcommand;
use dayflow_core::DayMode;

#[derive(Subcommand)]
pub enum ModesAction {
    /// List all day modes with their rules
    List,
    /// Show the rules for one mode
    Show {
        /// Mode name: "Deep Work", "Execution", "Balanced", or "Chill"
        mode: String,
    },
}

pub fn run(action: ModesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModesAction::List => {
            let table: Vec<_> = DayMode::ALL
                .iter()
                .map(|mode| {
                    serde_json::json!({
                        "mode": mode,
                        "rules": mode.rules(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        ModesAction::Show { mode } => {
            let mode: DayMode = serde_json::from_value(serde_json::Value::String(mode))?;
            println!("{}", serde_json::to_string_pretty(&mode.rules())?);
        }
    }
    Ok(())
}

//! Check-user command - validates a user profile given on the command line

use clap::Args;
use serde_json::{json, Map, Value};

use crate::domain::user::validate_user;

#[derive(Args, Debug, Clone)]
pub struct CheckUserArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Absolute website URL, including scheme
    #[arg(long)]
    pub website: String,

    /// Age, 13 to 90
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Number of friends (defaults to 0)
    #[arg(long, allow_hyphen_values = true)]
    pub friends: Option<String>,
}

impl CheckUserArgs {
    /// Raw input as the validator sees it; numbers stay textual
    fn to_raw(&self) -> Value {
        let mut raw = Map::new();
        raw.insert("name".to_string(), json!(self.name));
        raw.insert("email".to_string(), json!(self.email));
        raw.insert("website".to_string(), json!(self.website));

        if let Some(age) = &self.age {
            raw.insert("age".to_string(), json!(age));
        }

        if let Some(friends) = &self.friends {
            raw.insert("friends".to_string(), json!(friends));
        }

        Value::Object(raw)
    }
}

/// Validate and print the user, or every violated field
pub fn run(args: CheckUserArgs) -> anyhow::Result<()> {
    match validate_user(&args.to_raw()) {
        Ok(user) => {
            println!("{}", user);
            Ok(())
        }
        Err(report) => {
            eprintln!("{}", report);

            for error in report.errors() {
                eprintln!(
                    "{}\n  {} (type={})",
                    error.loc().join("."),
                    error.message(),
                    error.kind()
                );
            }

            anyhow::bail!("user failed validation")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(age: Option<&str>) -> CheckUserArgs {
        CheckUserArgs {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            website: "https://jane.com".to_string(),
            age: age.map(String::from),
            friends: None,
        }
    }

    #[test]
    fn test_raw_omits_absent_numbers() {
        let raw = args(None).to_raw();
        assert!(raw.get("age").is_none());
        assert!(raw.get("friends").is_none());
    }

    #[test]
    fn test_run_valid_user() {
        assert!(run(args(Some("15"))).is_ok());
    }

    #[test]
    fn test_run_invalid_user() {
        assert!(run(args(Some("12"))).is_err());
        assert!(run(args(Some("old"))).is_err());
    }
}

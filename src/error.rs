use thiserror::Error;

/// Non-fatal failures the interpreter reports back as response text.
///
/// Every category maps to exactly the line the user sees, but callers (and
/// tests) can match on the variant instead of parsing output. None of these
/// terminate the read loop or touch the contact table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BotError {
    /// A recognized command was given the wrong number of arguments.
    #[error("Error: Command format is '{usage}'")]
    Usage { usage: &'static str },

    /// `change` or `phone` named a contact that is not in the table.
    #[error("Error: Contact not found.")]
    NotFound,

    /// The command token matched no known operation.
    #[error("Invalid command. Please use one of the following commands:")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_names_the_expected_format() {
        let err = BotError::Usage {
            usage: "add [name] [phone]",
        };
        assert_eq!(
            err.to_string(),
            "Error: Command format is 'add [name] [phone]'"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(BotError::NotFound.to_string(), "Error: Contact not found.");
    }
}

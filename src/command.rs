/// Operation selected by the first word of an input line.
///
/// The mapping from token to variant is fixed at compile time; anything that
/// matches no known operation, including an empty line, becomes
/// [`Command::Unknown`] carrying the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Help,
    /// `close` and `exit` both terminate the read loop.
    Close,
    Unknown(String),
}

impl Command {
    /// Map an already lower-cased command token to its operation.
    fn from_token(token: &str) -> Self {
        match token {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "help" => Command::Help,
            "close" | "exit" => Command::Close,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// One parsed line of input: the selected operation plus its argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line into a command and arguments.
///
/// The command token is matched case-insensitively; argument tokens are kept
/// verbatim, so contact names keep their case. Surrounding whitespace is
/// ignored.
pub fn parse_line(line: &str) -> Request {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(token) => Command::from_token(&token.to_lowercase()),
        None => Command::Unknown(String::new()),
    };
    let args = words.map(str::to_owned).collect();
    Request { command, args }
}

use crate::book::ContactBook;
use crate::command::{Command, Request, parse_line};
use crate::error::BotError;
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";
const HELLO_REPLY: &str = "How can I help you?";
const CONTACT_ADDED: &str = "Contact added.";
const CONTACT_UPDATED: &str = "Contact updated.";
const NO_CONTACTS: &str = "No contacts available.";

const HELP: &str = "\
Available commands:
- hello: Greet the bot
- add [name] [phone]: Add a new contact
- change [name] [new_phone]: Change an existing contact's phone number
- phone [name]: Show the phone number of a contact
- all: Show all contacts
- help: Show this help message
- close, exit: Exit the bot";

/// A line-oriented interpreter over an in-memory [`ContactBook`].
///
/// The interpreter owns the contact table and a termination flag. Each input
/// line goes through one request-response cycle: parse, dispatch, answer.
/// `close`/`exit` flips the flag; everything else, including malformed input,
/// produces a response and keeps the loop running.
///
/// Example
/// ```
/// use assistant_bot::Interpreter;
/// let mut bot = Interpreter::new();
/// bot.handle_line("add Alice 111");
/// assert_eq!(bot.handle_line("phone Alice"), "Alice: 111");
/// ```
pub struct Interpreter {
    book: ContactBook,
    should_exit: bool,
}

impl Interpreter {
    /// Create an interpreter with an empty contact table.
    pub fn new() -> Self {
        Self {
            book: ContactBook::new(),
            should_exit: false,
        }
    }

    /// Whether a termination command has been received.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Read-only view of the contact table.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Execute one parsed request against the contact table.
    ///
    /// The structured result lets callers tell each failure category apart
    /// without inspecting text; [`handle_line`](Self::handle_line) flattens
    /// it back into the response the user sees.
    pub fn dispatch(&mut self, request: &Request) -> Result<String, BotError> {
        match &request.command {
            Command::Hello => Ok(HELLO_REPLY.to_string()),
            Command::Add => {
                let (name, phone) = exactly_two(&request.args, "add [name] [phone]")?;
                self.book.add(name, phone);
                Ok(CONTACT_ADDED.to_string())
            }
            Command::Change => {
                let (name, phone) = exactly_two(&request.args, "change [name] [new_phone]")?;
                if self.book.change(name, phone) {
                    Ok(CONTACT_UPDATED.to_string())
                } else {
                    Err(BotError::NotFound)
                }
            }
            Command::Phone => {
                let name = exactly_one(&request.args, "phone [name]")?;
                match self.book.phone(name) {
                    Some(phone) => Ok(format!("{name}: {phone}")),
                    None => Err(BotError::NotFound),
                }
            }
            Command::All => {
                if self.book.is_empty() {
                    Ok(NO_CONTACTS.to_string())
                } else {
                    let lines: Vec<String> =
                        self.book.iter().map(ToString::to_string).collect();
                    Ok(lines.join("\n"))
                }
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Close => {
                self.should_exit = true;
                Ok(FAREWELL.to_string())
            }
            Command::Unknown(token) => Err(BotError::Unknown(token.clone())),
        }
    }

    /// One full request-response cycle over raw text.
    ///
    /// Never fails: every error category comes back as its response string,
    /// with the help block appended for unrecognized commands.
    pub fn handle_line(&mut self, line: &str) -> String {
        let request = parse_line(line);
        debug!("parsed request: {request:?}");
        match self.dispatch(&request) {
            Ok(reply) => reply,
            Err(err @ BotError::Unknown(_)) => format!("{err}\n{HELP}"),
            Err(err) => err.to_string(),
        }
    }

    /// Interactive read loop over standard input.
    ///
    /// Runs until a termination command is received. End of input and Ctrl-C
    /// terminate the same way `close` does rather than erroring out.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("{GREETING}");
        println!("{HELP}");

        while !self.should_exit {
            match rl.readline("Enter a command: ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    println!("{}", self.handle_line(&line));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{FAREWELL}");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn exactly_two<'a>(
    args: &'a [String],
    usage: &'static str,
) -> Result<(&'a str, &'a str), BotError> {
    match args {
        [first, second] => Ok((first.as_str(), second.as_str())),
        _ => Err(BotError::Usage { usage }),
    }
}

fn exactly_one<'a>(args: &'a [String], usage: &'static str) -> Result<&'a str, BotError> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(BotError::Usage { usage }),
    }
}

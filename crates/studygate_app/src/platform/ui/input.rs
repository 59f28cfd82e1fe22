use studygate_core::Msg;

pub const HELP: &str = "\
Commands:
  url <text>     set the URL input
  open [url]     look up and open the URL
  start HH:MM    set the study start time
  end HH:MM      set the study end time
  reset          restore 09:00-17:00 and clear results
  show           print the form again
  help           print this help
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages applied in order, as one user action.
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Vec::new()),
        "url" => Command::Dispatch(vec![Msg::UrlInputChanged(rest.to_string())]),
        "open" if rest.is_empty() => Command::Dispatch(vec![Msg::OpenUrlClicked]),
        "open" => Command::Dispatch(vec![
            Msg::UrlInputChanged(rest.to_string()),
            Msg::OpenUrlClicked,
        ]),
        "start" => Command::Dispatch(vec![Msg::StartTimeChanged(rest.to_string())]),
        "end" => Command::Dispatch(vec![Msg::EndTimeChanged(rest.to_string())]),
        "reset" => Command::Dispatch(vec![Msg::ResetTimeClicked]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}

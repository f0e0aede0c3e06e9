use anyhow::{bail, Result};
use skyjet_core::Mode;

pub const HELP: &str = "\
/mode <executive|medical|incucai>  switch service mode
/emergency                         medical mode with the emergency flag raised
/suggest                           list quick replies for the current mode
/pick <n>                          load quick reply n into the input
/send                              submit the loaded input
/open, /close                      show or hide the widget
/history                           print the whole conversation
/help                              this text
/quit                              leave after pending replies arrive";

/// Slash commands understood by the terminal host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Mode(Mode),
    Emergency,
    Suggest,
    Pick(usize),
    Send,
    Open,
    Close,
    History,
    Help,
    Quit,
}

impl HostCommand {
    /// Parses a line starting with `/`. Any other line is chat input and
    /// yields `None`.
    pub fn parse(line: &str) -> Option<Result<HostCommand>> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        Some(Self::from_parts(&name, argument))
    }

    fn from_parts(name: &str, argument: Option<&str>) -> Result<HostCommand> {
        let command = match name {
            "mode" => match argument {
                Some(mode) => HostCommand::Mode(Mode::from_host(mode)),
                None => bail!("/mode needs a mode: executive, medical or incucai"),
            },
            "emergency" => HostCommand::Emergency,
            "suggest" => HostCommand::Suggest,
            "pick" => {
                let position = match argument.map(str::parse::<usize>) {
                    Some(Ok(position)) if position > 0 => position,
                    _ => bail!("/pick needs a suggestion number starting at 1"),
                };
                HostCommand::Pick(position - 1)
            }
            "send" => HostCommand::Send,
            "open" => HostCommand::Open,
            "close" => HostCommand::Close,
            "history" => HostCommand::History,
            "help" => HostCommand::Help,
            "quit" | "exit" => HostCommand::Quit,
            other => bail!("Unknown command '/{}', try /help", other),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(HostCommand::parse("¿Cuáles son los precios?").is_none());
        assert!(HostCommand::parse("precio / costo").is_none());
    }

    #[test]
    fn test_parse_commands() {
        let cases = [
            ("/mode medical", HostCommand::Mode(Mode::Medical)),
            ("/MODE Incucai", HostCommand::Mode(Mode::Incucai)),
            ("/mode cargo", HostCommand::Mode(Mode::Executive)),
            ("  /emergency ", HostCommand::Emergency),
            ("/suggest", HostCommand::Suggest),
            ("/pick 3", HostCommand::Pick(2)),
            ("/send", HostCommand::Send),
            ("/open", HostCommand::Open),
            ("/close", HostCommand::Close),
            ("/history", HostCommand::History),
            ("/help", HostCommand::Help),
            ("/exit", HostCommand::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(HostCommand::parse(line).unwrap().unwrap(), expected, "{line}");
        }
    }

    #[test]
    fn test_reject_malformed_commands() {
        for line in ["/mode", "/pick", "/pick 0", "/pick two", "/fly", "/"] {
            assert!(HostCommand::parse(line).unwrap().is_err(), "{line}");
        }
    }
}

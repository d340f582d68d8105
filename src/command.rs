use crate::error::CommandError;

/// A request typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list all`: every account's balance.
    ListAll,
    /// `list <account>`: one account's statement.
    ListOne(String),
    /// `quit` or `exit`.
    Quit,
}

impl Command {
    /// Parses a command. The keyword is case-insensitive, the account name is not.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let text = input.trim();
        let unrecognized = || CommandError::Unrecognized(text.to_owned());

        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            return Ok(Command::Quit);
        }

        let (keyword, rest) = text.split_once(char::is_whitespace).ok_or_else(unrecognized)?;
        if !keyword.eq_ignore_ascii_case("list") {
            return Err(unrecognized());
        }

        let target = rest.trim();
        if target.is_empty() {
            Err(unrecognized())
        } else if target.eq_ignore_ascii_case("all") {
            Ok(Command::ListAll)
        } else {
            Ok(Command::ListOne(target.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_any_case() {
        assert_eq!(Command::parse("list all"), Ok(Command::ListAll));
        assert_eq!(Command::parse("LIST All\n"), Ok(Command::ListAll));
    }

    #[test]
    fn test_list_one_keeps_name_case_and_spaces() {
        assert_eq!(Command::parse("List Jon A"), Ok(Command::ListOne("Jon A".to_owned())));
        assert_eq!(Command::parse("list sarah t"), Ok(Command::ListOne("sarah t".to_owned())));
    }

    #[test]
    fn test_quit() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_unrecognized() {
        for input in ["", "list", "list   ", "show all", "listall", "hello world"] {
            assert!(
                matches!(Command::parse(input), Err(CommandError::Unrecognized(_))),
                "{:?} should be rejected",
                input
            );
        }
    }
}

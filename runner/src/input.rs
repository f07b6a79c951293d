use snake_engine::game::{Direction, SessionCommand};

/// Maps one line typed on stdin to a session command.
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => SessionCommand::Turn(Direction::Up),
        "s" | "down" => SessionCommand::Turn(Direction::Down),
        "a" | "left" => SessionCommand::Turn(Direction::Left),
        "d" | "right" => SessionCommand::Turn(Direction::Right),
        "p" | "pause" => SessionCommand::TogglePause,
        "q" | "quit" => SessionCommand::End,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_keys() {
        assert_eq!(parse_command("w"), Some(SessionCommand::Turn(Direction::Up)));
        assert_eq!(parse_command(" Left \n"), Some(SessionCommand::Turn(Direction::Left)));
        assert_eq!(parse_command("D"), Some(SessionCommand::Turn(Direction::Right)));
        assert_eq!(parse_command("down"), Some(SessionCommand::Turn(Direction::Down)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(parse_command("p"), Some(SessionCommand::TogglePause));
        assert_eq!(parse_command("quit"), Some(SessionCommand::End));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("jump"), None);
    }
}

use crate::graph::NodeKind;

use super::condition::Label;

/// Map an evaluation label to the terminal action that handles it.
///
/// Total over [`Label`], so there is no fallback branch to take.
pub fn route(label: Label) -> NodeKind {
    match label {
        Label::High => NodeKind::HighHandler,
        Label::Low => NodeKind::LowHandler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_is_one_to_one() {
        assert_eq!(route(Label::High), NodeKind::HighHandler);
        assert_eq!(route(Label::Low), NodeKind::LowHandler);
        assert_ne!(route(Label::High), route(Label::Low));
    }

    #[test]
    fn test_route_targets_terminal_actions() {
        for label in Label::ALL {
            assert!(route(label).is_terminal_action());
        }
    }
}

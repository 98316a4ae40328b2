#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    In,
    Out,
}

impl EventKind {
    /// Label used in console notifications and the activity log.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::In => "IN",
            EventKind::Out => "OUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_console_output() {
        assert_eq!(EventKind::In.label(), "IN");
        assert_eq!(EventKind::Out.label(), "OUT");
    }
}

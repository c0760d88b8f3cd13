pub const DEFAULT_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Identifies one showing of a notice, so a hide timer can tell whether it is stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

impl NoticeId {
    pub fn next(self) -> Self {
        NoticeId(self.0 + 1)
    }
}

/// The single notice slot of the page. The last notice shown stays until
/// its own timer fires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<(NoticeId, Notice)>,
    visible: bool,
}

impl NoticeBoard {
    pub fn show(&mut self, id: NoticeId, notice: Notice) {
        self.current = Some((id, notice));
        self.visible = true;
    }

    /// Returns whether anything was hidden.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some((current, _)) if *current == id && self.visible => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// The notice to style the slot with, even while hidden.
    pub fn notice(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, n)| n)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_hides_matching_notice() {
        let mut board = NoticeBoard::default();
        assert!(!board.is_visible());
        board.show(NoticeId(1), Notice::success("Signed up Jane"));
        assert!(board.is_visible());
        assert!(board.expire(NoticeId(1)));
        assert!(!board.is_visible());
        assert_eq!(board.notice().map(|n| n.text.as_str()), Some("Signed up Jane"));
    }

    #[test]
    fn stale_timer_does_not_hide_newer_notice() {
        let mut board = NoticeBoard::default();
        board.show(NoticeId(1), Notice::success("first"));
        board.show(NoticeId(2), Notice::error("second"));
        assert!(!board.expire(NoticeId(1)));
        assert!(board.is_visible());
        assert!(board.expire(NoticeId(2)));
        assert!(!board.expire(NoticeId(2)));
    }

    #[test]
    fn kind_classes() {
        assert_eq!(Notice::success("x").kind.class(), "success");
        assert_eq!(Notice::error("x").kind.class(), "error");
        assert_eq!(NoticeId::default().next(), NoticeId(1));
    }
}

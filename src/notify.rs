//! Notifications
//!
//! The store reports outcomes through a `Notifier`; the page implementation
//! lives next to the reactive view state.

use crate::models::NoticeKind;

pub trait Notifier {
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Writes notices to the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Success => log::info!("{}", message),
            NoticeKind::Error => log::warn!("{}", message),
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, message: &str, kind: NoticeKind) {
        (**self).notify(message, kind)
    }
}

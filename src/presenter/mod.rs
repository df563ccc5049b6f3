//! Error presentation shared by the front ends.
//!
//! Tracker operations return `Result`; front ends pass failures through an
//! [`ErrorPresenter`] instead of deciding per call site how to show them.

use crate::Error;

pub const ERROR_TITLE: &str = "Error";

pub trait ErrorPresenter {
    fn present(&mut self, title: &str, message: &str);

    fn present_error(&mut self, error: &Error) {
        self.present(ERROR_TITLE, &error.to_string());
    }
}

/// Route a failed operation to `presenter`, passing successes through.
pub fn report<T>(presenter: &mut dyn ErrorPresenter, result: crate::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}", e);
            presenter.present_error(&e);
            None
        }
    }
}

/// Command-line presentation: one line on stderr per error.
#[derive(Debug, Default)]
pub struct StderrPresenter;

impl ErrorPresenter for StderrPresenter {
    fn present(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<(String, String)>,
    }

    impl ErrorPresenter for Recorder {
        fn present(&mut self, title: &str, message: &str) {
            self.shown.push((title.to_string(), message.to_string()));
        }
    }

    #[test]
    fn test_report_passes_success_through() {
        let mut recorder = Recorder::default();
        assert_eq!(report(&mut recorder, Ok(5)), Some(5));
        assert!(recorder.shown.is_empty());
    }

    #[test]
    fn test_report_presents_failure() {
        let mut recorder = Recorder::default();
        let result: crate::Result<()> = Err(Error::SearchFailed(404));

        assert_eq!(report(&mut recorder, result), None);
        assert_eq!(
            recorder.shown,
            vec![("Error".to_string(), "Search failed. (404)".to_string())]
        );
    }
}

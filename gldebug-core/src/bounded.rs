//! Length bounds for driver logs and reported messages.
//!
//! Both limits count a terminator slot, so the text itself holds at most
//! `capacity - 1` bytes. Cuts always land on a UTF-8 character boundary.

/// Size of the buffer an info log is read into, terminator included.
pub const INFO_LOG_CAPACITY: usize = 1024;

/// Size of a formatted message, terminator included.
pub const MESSAGE_CAPACITY: usize = 1024;

/// Bounds a shader or program info log to [`INFO_LOG_CAPACITY`].
///
/// A log that does not fit is cut and one line terminator (`\r\n`, `\n` or
/// `\r`) left at the cut is dropped. Logs that fit are returned untouched.
pub fn info_log(mut log: String) -> String {
    if truncate(&mut log, INFO_LOG_CAPACITY - 1) {
        let kept = ["\r\n", "\n", "\r"]
            .iter()
            .find_map(|terminator| log.strip_suffix(terminator))
            .map(str::len);
        if let Some(kept) = kept {
            log.truncate(kept);
        }
    }
    log
}

/// Bounds a formatted message to [`MESSAGE_CAPACITY`].
pub fn message(mut text: String) -> String {
    truncate(&mut text, MESSAGE_CAPACITY - 1);
    text
}

/// Truncates `text` to at most `max_len` bytes; returns true if anything was cut.
fn truncate(text: &mut String, max_len: usize) -> bool {
    if text.len() <= max_len {
        return false;
    }

    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_log_untouched() {
        let log = "0:1(10): error: syntax error\n".to_string();
        assert_eq!(info_log(log.clone()), log);
    }

    #[test]
    fn test_long_log_is_bounded() {
        let log = "error: unexpected token\n".repeat(100);
        let bounded = info_log(log.clone());

        assert!(bounded.len() < INFO_LOG_CAPACITY);
        assert!(log.starts_with(&bounded));
        assert!(!bounded.ends_with('\n'));
    }

    #[test]
    fn test_partial_line_terminator_dropped() {
        // cut lands between '\r' and '\n'
        let mut log = "x".repeat(INFO_LOG_CAPACITY - 2);
        log.push_str("\r\nmore");

        let bounded = info_log(log);
        assert_eq!(bounded.len(), INFO_LOG_CAPACITY - 2);
        assert!(bounded.chars().all(|c| c == 'x'));
    }

    #[test]
    fn test_only_one_terminator_dropped() {
        // cut lands right after a blank line
        let mut log = "x".repeat(INFO_LOG_CAPACITY - 3);
        log.push_str("\n\nmore text");

        let bounded = info_log(log);
        assert_eq!(bounded.len(), INFO_LOG_CAPACITY - 2);
        assert!(bounded.ends_with("x\n"));
    }

    #[test]
    fn test_cut_respects_char_boundary() {
        // 'é' is two bytes; 1023 is odd so the cut falls inside one
        let log = "é".repeat(INFO_LOG_CAPACITY);
        let bounded = info_log(log);

        assert_eq!(bounded.len(), INFO_LOG_CAPACITY - 2);
        assert!(bounded.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_message_bound() {
        let text = "a".repeat(MESSAGE_CAPACITY * 2);
        assert_eq!(message(text).len(), MESSAGE_CAPACITY - 1);

        let exact = "b".repeat(MESSAGE_CAPACITY - 1);
        assert_eq!(message(exact.clone()), exact);
    }
}

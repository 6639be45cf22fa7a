use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

pub const TRIGGER_LOG_FILE: &str = "triggers.log";

/// Append a fired trigger to the log file. Best effort; I/O errors are
/// ignored.
pub fn append_trigger_log(name: &str, text: Option<&str>) {
    append_to(TRIGGER_LOG_FILE, name, text);
}

pub fn append_to(path: &str, name: &str, text: Option<&str>) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let line = match text {
            Some(text) => format!("{} - {}: {}", Local::now().to_rfc3339(), name, text),
            None => format!("{} - {}", Local::now().to_rfc3339(), name),
        };
        let _ = writeln!(file, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::append_to;
    use tempfile::tempdir;

    #[test]
    fn appends_one_line_per_trigger() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("triggers.log");
        let path = path.to_str().unwrap();

        append_to(path, "konami", Some("You found the secret!"));
        append_to(path, "stahl", None);

        let content = std::fs::read_to_string(path).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("konami: You found the secret!"));
        assert!(lines[1].ends_with("- stahl"));
    }
}

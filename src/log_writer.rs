use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

/// A destination for rendered log lines.
pub trait LogWriter {
    fn regular(&mut self, line: &str);
}

/// Append-mode log file. Writes are unbuffered, so every line is on disk
/// before the log call returns and there is nothing left to flush at exit.
pub struct LogFile {
    file: File,
}

impl LogFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl LogWriter for LogFile {
    fn regular(&mut self, line: &str) {
        // Write errors (disk full, revoked handle) are swallowed: logging
        // must never fault the host application.
        let _ = writeln!(self.file, "{line}");
    }
}

#[derive(Default, Debug)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn regular(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

#[test]
fn test_log_file_appends() {
    let path = "/tmp/duolog-test-log-file.log";
    std::fs::remove_file(path).ok();
    {
        let mut file = LogFile::open(path).unwrap();
        file.regular("Hello, world!");
        file.regular("rust is awesome !");
    }
    // Reopening must keep the previous contents.
    let mut file = LogFile::open(path).unwrap();
    file.regular("test");
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "Hello, world!\nrust is awesome !\ntest\n"
    );
}

#[test]
fn test_log_stdout() {
    let mut stdout = LogStdout;
    stdout.regular("Hello, world!");
    stdout.regular("lorem ipsum");
}

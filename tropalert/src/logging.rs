use env_logger::{Builder, Env, Target, WriteStyle};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

/// Sends log records to stderr and appends them to `log_file`.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init(log_file: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(Tee(io::stderr(), file))))
        .init();
    Ok(())
}

/// Writes everything to both sinks.
struct Tee<A, B>(A, B);

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_all(buf)?;
        self.1.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()?;
        self.1.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::Tee;
    use std::io::Write;

    #[test]
    fn test_tee_writes_both() {
        let mut tee = Tee(Vec::new(), Vec::new());
        writeln!(tee, "[2026-10-19T06:00:00Z] INFO  tropo index: -0.38").unwrap();
        write!(tee, "é").unwrap();
        tee.flush().unwrap();
        let Tee(console, file) = tee;
        assert_eq!(console, file);
        assert_eq!(
            String::from_utf8(file).unwrap(),
            "[2026-10-19T06:00:00Z] INFO  tropo index: -0.38\né"
        );
    }
}

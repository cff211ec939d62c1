//! Tracing and panic-hook installation for hosts embedding the picker.
//!
//! Both installers are idempotent and safe to call from every entry point.

use std::io::{self, Write};
use std::panic;
use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;

const TRACING_PREFIX: &str = "[swatch]";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static PANIC_HOOK_INSTALLED: Once = Once::new();
static TRACING_INSTALLED: Once = Once::new();

/// Builds the filter used by [`install_tracing`].
///
/// `RUST_LOG` wins when it is set and valid; otherwise everything at `info`
/// and above is kept.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .from_env_lossy()
}

/// Installs a global subscriber writing prefixed lines to stderr.
///
/// Does nothing if this or another subscriber is already installed.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let console = tracing_subscriber::fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_filter(env_filter());

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{TRACING_PREFIX} a tracing subscriber is already installed");
        }
    });
}

/// Routes panics through `tracing` before the previous hook runs.
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            tracing_panic::panic_hook(info);
            previous(info);
        }));
    });
}

// ============================================================================
// Console Output
// ============================================================================

#[derive(Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner::new(io::stderr())
    }
}

struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W> PrefixedWriterInner<W> {
    const fn new(inner: W) -> Self {
        Self {
            inner,
            wrote_prefix: false,
        }
    }
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.inner.write_all(b" ")?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

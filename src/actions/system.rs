//! `system`: OS, memory and property readouts
//!
//! Every value here is a live query of the host. Anything that cannot be
//! determined is shown as `unknown` rather than failing the command.

use std::io::{self, Write};
use std::path::{Path, MAIN_SEPARATOR};

use directories::BaseDirs;
use tracing::{debug, instrument};

use crate::cli::args::SystemArgs;
use crate::cli::error::{CliResult, IoResultExt};

const UNKNOWN: &str = "unknown";

/// Which sections `system` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub info: bool,
    pub memory: bool,
    pub properties: bool,
}

impl Sections {
    /// Info is shown when asked for, or when nothing else is.
    pub fn from_args(args: &SystemArgs) -> Self {
        Self {
            info: args.info || (!args.memory && !args.properties),
            memory: args.memory,
            properties: args.properties,
        }
    }
}

/// Host memory in kibibytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub total_kb: u64,
    pub free_kb: u64,
}

impl MemoryStats {
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.free_kb)
    }
}

/// Parse `MemTotal` and `MemAvailable` out of `/proc/meminfo` text.
pub fn parse_meminfo(text: &str) -> Option<MemoryStats> {
    let field = |name: &str| {
        text.lines()
            .find(|l| l.starts_with(name))
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|v| v.parse::<u64>().ok())
    };
    Some(MemoryStats {
        total_kb: field("MemTotal:")?,
        free_kb: field("MemAvailable:")?,
    })
}

#[cfg(target_os = "linux")]
fn memory_stats() -> Option<MemoryStats> {
    std::fs::read_to_string("/proc/meminfo")
        .ok()
        .and_then(|text| parse_meminfo(&text))
}

#[cfg(not(target_os = "linux"))]
fn memory_stats() -> Option<MemoryStats> {
    None
}

/// OS type and version as reported by `os_info`, e.g. `Ubuntu 22.04`.
pub fn os_line() -> String {
    let info = os_info::get();
    let os_type = info.os_type().to_string();
    let version = info.version().to_string();
    if version.is_empty() || version == "Unknown" {
        os_type
    } else {
        format!("{os_type} {version}")
    }
}

/// First non-empty login variable, else the last component of the home
/// directory (resolved from the account database when `HOME` is unset).
pub fn resolve_user_name(
    lookup: impl Fn(&str) -> Option<String>,
    home: Option<&Path>,
) -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .or_else(|| {
            home.and_then(|h| h.file_name())
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| UNKNOWN.into())
}

fn user_name() -> String {
    let dirs = BaseDirs::new();
    resolve_user_name(
        |key| std::env::var(key).ok(),
        dirs.as_ref().map(|d| d.home_dir()),
    )
}

/// Key/value pairs for the properties section, in display order.
pub fn properties() -> Vec<(&'static str, String)> {
    let exe = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| UNKNOWN.into());
    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().display().to_string())
        .unwrap_or_else(|| UNKNOWN.into());
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| UNKNOWN.into());
    vec![
        ("exe.path", exe),
        ("user.home", home),
        ("user.dir", cwd),
        ("file.separator", MAIN_SEPARATOR.to_string()),
    ]
}

#[instrument(level = "debug", skip(out))]
pub fn system(args: &SystemArgs, out: &mut dyn Write) -> CliResult<()> {
    let sections = Sections::from_args(args);
    debug!("sections: {:?}", sections);

    if sections.info {
        write_info(out).with_context("write system information")?;
    }
    if sections.memory {
        write_memory(memory_stats(), out).with_context("write memory usage")?;
    }
    if sections.properties {
        write_properties(&properties(), out).with_context("write system properties")?;
    }
    Ok(())
}

fn write_info(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "🖥️  System Information:")?;
    writeln!(out, "  OS: {}", os_line())?;
    writeln!(
        out,
        "  Runtime: {} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    )?;
    writeln!(out, "  User: {}", user_name())
}

fn write_memory(stats: Option<MemoryStats>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n💾 Memory Usage:")?;
    match stats {
        Some(s) => {
            writeln!(out, "  Total: {} MB", s.total_kb / 1024)?;
            writeln!(out, "  Used:  {} MB", s.used_kb() / 1024)?;
            writeln!(out, "  Free:  {} MB", s.free_kb / 1024)
        }
        None => writeln!(out, "  unavailable on this platform"),
    }
}

fn write_properties(props: &[(&str, String)], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n⚙️  Key System Properties:")?;
    for (key, value) in props {
        writeln!(out, "  {key}: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::render;
    use rstest::rstest;

    const MEMINFO: &str = "\
MemTotal:       16314328 kB
MemFree:         1021144 kB
MemAvailable:    8157164 kB
Buffers:          412772 kB
";

    fn flags(info: bool, memory: bool, properties: bool) -> SystemArgs {
        SystemArgs {
            info,
            memory,
            properties,
        }
    }

    #[rstest]
    #[case(flags(false, false, false), true)]
    #[case(flags(true, false, false), true)]
    #[case(flags(false, true, false), false)]
    #[case(flags(false, false, true), false)]
    #[case(flags(true, true, true), true)]
    fn given_flags_when_selecting_sections_then_info_is_default(
        #[case] args: SystemArgs,
        #[case] info: bool,
    ) {
        assert_eq!(Sections::from_args(&args).info, info);
    }

    #[test]
    fn given_meminfo_text_when_parsed_then_total_and_available_extracted() {
        let stats = parse_meminfo(MEMINFO).expect("parse");
        assert_eq!(stats.total_kb, 16314328);
        assert_eq!(stats.free_kb, 8157164);
        assert_eq!(stats.used_kb(), 16314328 - 8157164);
    }

    #[test]
    fn given_truncated_meminfo_when_parsed_then_none() {
        assert_eq!(parse_meminfo("MemTotal: 1024 kB\n"), None);
        assert_eq!(parse_meminfo(""), None);
    }

    #[test]
    fn given_stats_when_write_memory_then_reports_megabytes() {
        let stats = MemoryStats {
            total_kb: 4 * 1024 * 1024,
            free_kb: 1024 * 1024,
        };
        let output = render(|out| write_memory(Some(stats), out).with_context("test"));
        assert_eq!(
            output,
            "\n💾 Memory Usage:\n  Total: 4096 MB\n  Used:  3072 MB\n  Free:  1024 MB\n"
        );
    }

    #[test]
    fn given_host_when_os_line_then_starts_with_os_type() {
        let line = os_line();
        assert!(!line.trim().is_empty());
        assert!(line.starts_with(&os_info::get().os_type().to_string()));
    }

    #[test]
    fn given_login_variable_when_resolving_user_then_variable_wins() {
        let lookup = |key: &str| (key == "LOGNAME").then(|| "carol".to_string());
        let name = resolve_user_name(lookup, Some(Path::new("/home/dave")));
        assert_eq!(name, "carol");
    }

    #[test]
    fn given_blank_variables_when_resolving_user_then_home_basename() {
        let lookup = |_: &str| Some("  ".to_string());
        let name = resolve_user_name(lookup, Some(Path::new("/home/dave")));
        assert_eq!(name, "dave");
    }

    #[test]
    fn given_nothing_known_when_resolving_user_then_unknown() {
        assert_eq!(resolve_user_name(|_| None, None), "unknown");
    }

    #[test]
    fn given_no_flags_when_system_then_only_info_section() {
        let output = render(|out| system(&flags(false, false, false), out));
        assert!(output.starts_with("🖥️  System Information:\n"));
        assert!(output.contains("  OS: "));
        assert!(output.contains("  Runtime: myapp "));
        assert!(output.contains(&format!("  OS: {}\n", os_line())));
        assert!(output.contains("  User: "));
        assert!(!output.contains("Memory Usage"));
        assert!(!output.contains("Key System Properties"));
    }

    #[test]
    fn given_memory_and_properties_when_system_then_info_suppressed() {
        let output = render(|out| system(&flags(false, true, true), out));
        assert!(!output.contains("System Information"));
        assert!(output.contains("💾 Memory Usage:"));
        assert!(output.contains("⚙️  Key System Properties:"));
        for key in ["exe.path", "user.home", "user.dir", "file.separator"] {
            assert!(output.contains(&format!("  {key}: ")), "missing {key}");
        }
    }
}

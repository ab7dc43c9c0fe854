//! `user create` and `user list`

use std::io::Write;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::args::{CreateUserArgs, ListUsersArgs, OutputFormat};
use crate::cli::error::{CliResult, IoResultExt};
use crate::cli::output;
use crate::config::Settings;

const SAMPLE_USERS: [&str; 3] = ["alice", "bob", "charlie"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// The fixed listing shown by `user list`.
pub fn sample_users() -> Vec<UserRecord> {
    SAMPLE_USERS
        .iter()
        .map(|name| UserRecord {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            role: "USER".into(),
        })
        .collect()
}

#[instrument(level = "debug", skip(settings, out))]
pub fn create(args: &CreateUserArgs, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    let role = args
        .role
        .as_deref()
        .unwrap_or(settings.user.default_role.as_str());
    debug!("resolved role: {}", role);

    write_confirmation(&args.username, args.email.as_deref(), role, out)
        .with_context("write user confirmation")
}

fn write_confirmation(
    username: &str,
    email: Option<&str>,
    role: &str,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "Creating user: {username}")?;
    if let Some(email) = email {
        writeln!(out, "  Email: {email}")?;
    }
    writeln!(out, "  Role: {role}")?;
    writeln!(out, "✅ User created successfully!")
}

#[instrument(level = "debug", skip(out))]
pub fn list(args: &ListUsersArgs, out: &mut dyn Write) -> CliResult<()> {
    let users = sample_users();
    let banner = format!("Listing users (format: {}):", args.format);

    match args.format {
        OutputFormat::Table => {
            writeln!(out, "{banner}").with_context("write user list")?;
            write_table(&users, out).with_context("write user table")
        }
        OutputFormat::Json => {
            output::note(&banner);
            write_json(&users, out).with_context("write user json")
        }
        OutputFormat::Csv => {
            output::note(&banner);
            write_csv(&users, out).with_context("write user csv")
        }
    }
}

fn write_table(users: &[UserRecord], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "┌──────────┬─────────────────────┬────────┐")?;
    writeln!(out, "│ Username │ Email               │ Role   │")?;
    writeln!(out, "├──────────┼─────────────────────┼────────┤")?;
    for u in users {
        writeln!(out, "│ {:<8} │ {:<19} │ {:<6} │", u.username, u.email, u.role)?;
    }
    writeln!(out, "└──────────┴─────────────────────┴────────┘")
}

/// One object per line inside a JSON array.
fn write_json(users: &[UserRecord], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "[")?;
    for (i, u) in users.iter().enumerate() {
        let row = serde_json::to_string(u)?;
        let sep = if i + 1 < users.len() { "," } else { "" };
        writeln!(out, "  {row}{sep}")?;
    }
    writeln!(out, "]")
}

fn write_csv(users: &[UserRecord], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "username,email,role")?;
    for u in users {
        writeln!(out, "{},{},{}", u.username, u.email, u.role)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::render;

    fn create_args(email: Option<&str>, role: Option<&str>) -> CreateUserArgs {
        CreateUserArgs {
            username: "dora".into(),
            email: email.map(String::from),
            role: role.map(String::from),
        }
    }

    #[test]
    fn given_no_email_when_create_then_email_line_omitted() {
        let output = render(|out| create(&create_args(None, None), &Settings::default(), out));
        assert_eq!(
            output,
            "Creating user: dora\n  Role: USER\n✅ User created successfully!\n"
        );
    }

    #[test]
    fn given_email_when_create_then_email_printed_verbatim() {
        let output = render(|out| {
            create(&create_args(Some("Dora@Example.org"), Some("ADMIN")), &Settings::default(), out)
        });
        assert!(output.contains("  Email: Dora@Example.org\n"));
        assert!(output.contains("  Role: ADMIN\n"));
    }

    #[test]
    fn given_configured_default_role_when_create_without_role_then_uses_setting() {
        let mut settings = Settings::default();
        settings.user.default_role = "GUEST".into();
        let output = render(|out| create(&create_args(None, None), &settings, out));
        assert!(output.contains("  Role: GUEST\n"));
    }

    #[test]
    fn given_json_format_when_list_then_valid_array_of_three_users() {
        let output = render(|out| list(&ListUsersArgs { format: OutputFormat::Json }, out));
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        let rows = parsed.as_array().expect("array");
        assert_eq!(rows.len(), 3);
        for row in rows {
            let obj = row.as_object().expect("object");
            let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, ["email", "role", "username"]);
        }
        assert_eq!(rows[2]["email"], "charlie@example.com");
    }

    #[test]
    fn given_table_format_when_list_then_banner_and_aligned_rows() {
        let output = render(|out| list(&ListUsersArgs { format: OutputFormat::Table }, out));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Listing users (format: TABLE):");
        assert_eq!(lines[4], "│ alice    │ alice@example.com   │ USER   │");
        assert_eq!(lines.len(), 1 + 3 + 3 + 1);
        let width = lines[1].chars().count();
        assert!(lines[1..].iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn given_csv_format_when_list_then_header_and_rows() {
        let output = render(|out| list(&ListUsersArgs { format: OutputFormat::Csv }, out));
        assert_eq!(
            output,
            "username,email,role\nalice,alice@example.com,USER\nbob,bob@example.com,USER\ncharlie,charlie@example.com,USER\n"
        );
    }
}

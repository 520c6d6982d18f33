use crate::command::Command;


/// Parse CLI arguments into a typed Command enum.
///
/// Arguments are expected WITHOUT the program name (i.e., `args` should
/// be `["copy", "a.json", "b.json", "--path", "x"]`, not
/// `["fieldcopy", "copy", ...]`).
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'fieldcopy help' for usage.".into());
    }

    match args[0] {
        "copy" => parse_copy(args),
        "get" => parse_get(args),
        "help" | "--help" | "-h" => Ok(Command::Help),
        _ => Err(format!("Unknown command: '{}'", args[0])),
    }
}


/// Usage text printed by `fieldcopy help`.
pub fn usage() -> &'static str {
    "Usage:\n\
     \x20 fieldcopy copy <source> <dest> [--path <a.b.c>]... [--plan <file>] [--format json|yaml]\n\
     \x20 fieldcopy get <file> <path> [--format json|yaml]\n\
     \x20 fieldcopy help\n\
     \n\
     Paths use serialized field names joined by '.'. Every segment must\n\
     already exist in both documents.\n\
     Set FIELDCOPY_LOG (e.g. 'debug') to control log output."
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `fieldcopy copy <source> <dest> [--path P]... [--plan FILE] [--format F]`
fn parse_copy(args: &[&str]) -> Result<Command, String> {
    let positional = positional_args(&args[1..], &["--path", "--plan", "--format"])?;
    if positional.len() != 2 {
        return Err("Usage: fieldcopy copy <source> <dest> [--path <path>]... [--plan <file>]".into());
    }
    Ok(Command::Copy {
        source: positional[0].into(),
        dest: positional[1].into(),
        paths: flag_values(args, "--path"),
        plan: flag_value(args, "--plan"),
        format: flag_value(args, "--format"),
    })
}

/// `fieldcopy get <file> <path> [--format F]`
fn parse_get(args: &[&str]) -> Result<Command, String> {
    let positional = positional_args(&args[1..], &["--format"])?;
    if positional.len() != 2 {
        return Err("Usage: fieldcopy get <file> <path>".into());
    }
    Ok(Command::Get {
        file: positional[0].into(),
        path: positional[1].into(),
        format: flag_value(args, "--format"),
    })
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Collect non-flag arguments, skipping each known flag and its value.
fn positional_args<'a>(args: &[&'a str], known_flags: &[&str]) -> Result<Vec<&'a str>, String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i];
        if arg.starts_with("--") {
            if !known_flags.contains(&arg) {
                return Err(format!("Unknown flag: '{}'", arg));
            }
            if i + 1 >= args.len() {
                return Err(format!("Missing value for {}", arg));
            }
            i += 2;
        } else {
            out.push(arg);
            i += 1;
        }
    }
    Ok(out)
}

/// Extract the value following `flag` (last occurrence wins).
fn flag_value(args: &[&str], flag: &str) -> Option<String> {
    flag_values(args, flag).pop()
}

/// Extract every value following `flag`, in order.
fn flag_values(args: &[&str], flag: &str) -> Vec<String> {
    args.windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].to_string())
        .collect()
}

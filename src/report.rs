use doorspec::{ExtractionVerbose, FieldTrace, Provenance};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

const PREVIEW_CHARS: usize = 60;

pub fn print_run(input: &str, res: &ExtractionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", preview(input)), ansi::CYAN)));
    println!(
        "  {} {}  {} {}  {} {}",
        palette.dim("mode:"),
        palette.paint(res.options.mode.to_string(), ansi::BLUE),
        palette.dim("│ policy:"),
        palette.paint(res.options.policy.to_string(), ansi::BLUE),
        palette.dim("│ corpus:"),
        palette.paint(format!("{} bytes", details.corpus_len), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if details.active_rules.is_empty() {
        println!("{}", palette.dim("  No rules eligible for this input"));
    } else {
        println!("  {}", palette.paint(format!("✓ {} active", details.active_rules.len()), ansi::GREEN));
        for name in &details.active_rules {
            println!("    {}", palette.dim(name));
        }
    }

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    for trace in &details.fields {
        print_field(trace, &palette);
    }

    let violations = res.spec.violations();
    if !violations.is_empty() {
        println!("\n{}", palette.paint("━━━ Violations ━━━", ansi::GRAY));
        for v in violations {
            println!("  {} {}", palette.paint("✗", ansi::YELLOW), v);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", details.timings.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.timings.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.timings.resolve)),
    );
    println!();
}

fn print_field(trace: &FieldTrace, palette: &ansi::Palette) {
    let value = if trace.provenance == Provenance::Unknown {
        palette.dim(&trace.value)
    } else {
        palette.bold(palette.paint(&trace.value, ansi::GREEN))
    };
    let how = match trace.provenance {
        Provenance::Matched { .. } => palette.paint(trace.provenance.label(), ansi::CYAN),
        Provenance::Derived { .. } => palette.paint(trace.provenance.label(), ansi::MAGENTA),
        Provenance::Defaulted => palette.paint(trace.provenance.label(), ansi::YELLOW),
        Provenance::Unknown => palette.dim(trace.provenance.label()),
    };

    print!("  {:<22} {} {} {}", trace.field.key(), value, palette.dim("│"), how);
    match trace.provenance.detail() {
        Some(detail) => println!(" {}", palette.dim(format!("({detail})"))),
        None => println!(),
    }
}

fn preview(input: &str) -> String {
    let flat = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}…")
}

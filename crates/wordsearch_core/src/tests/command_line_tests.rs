use super::*;

use std::collections::HashSet;

use clap::Parser;
use shared::domain::PageSize;

/// Argument surface of the wordsearch generator.
#[derive(Parser, Debug)]
struct GeneratorArgs {
    filename: String,
    #[arg(short, long, default_value = "output.pdf")]
    output: String,
    #[arg(short, long)]
    json: bool,
    #[arg(short, long, default_value = "15")]
    rows: usize,
    #[arg(short, long, default_value = "15")]
    cols: usize,
    #[arg(short, long, default_value = "16")]
    grid_font_size: f32,
    #[arg(short, long, default_value = "12")]
    word_bank_font_size: f32,
    #[arg(short, long, default_value = "letter")]
    size: String,
    #[arg(short, long, default_value = "36")]
    margin: f32,
    #[arg(short, long, default_value = "Wordsearch")]
    title: String,
    #[arg(short = 'f', long, default_value = "24")]
    title_font_size: f32,
}

fn parse_as_generator(args: &[OsString]) -> Result<GeneratorArgs, clap::Error> {
    let argv = std::iter::once(OsString::from("wordsearch")).chain(args.iter().cloned());
    GeneratorArgs::try_parse_from(argv)
}

fn strings(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Value of `--flag=value`, or of the token following a bare `flag`.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let prefix = format!("{flag}=");
    args.iter()
        .find_map(|arg| arg.strip_prefix(prefix.as_str()))
        .or_else(|| {
            args.iter()
                .position(|arg| arg == flag)
                .and_then(|idx| args.get(idx + 1))
                .map(String::as_str)
        })
}

fn pdf_mode(path: &str) -> OutputMode {
    OutputMode::Pdf {
        output_path: PathBuf::from(path),
    }
}

#[test]
fn word_list_is_first_positional_argument() {
    let args = strings(&build_args(
        Path::new("/tmp/words.txt"),
        &pdf_mode("out.pdf"),
        &PdfOptions::default(),
    ));
    assert_eq!(args[0], "/tmp/words.txt");
}

#[test]
fn pdf_mode_has_exactly_one_output_flag_and_no_duplicates() {
    let option_sets = [
        PdfOptions::default(),
        PdfOptions {
            page_size: PageSize::A4,
            rows: 0,
            cols: 1000,
            title: String::new(),
            ..PdfOptions::default()
        },
        PdfOptions {
            page_size: PageSize::Custom {
                width: 1,
                height: 2,
            },
            margin: 0,
            title: "-o".to_string(),
            ..PdfOptions::default()
        },
    ];

    for options in option_sets {
        let args = strings(&build_args(
            Path::new("words.txt"),
            &pdf_mode("out.pdf"),
            &options,
        ));

        assert_eq!(
            args.iter().filter(|arg| *arg == "-o").count(),
            1,
            "args: {args:?}"
        );
        assert_eq!(flag_value(&args, "-o"), Some("out.pdf"));

        let flags: Vec<&str> = args[3..]
            .iter()
            .map(|arg| arg.split_once('=').map_or(arg.as_str(), |(flag, _)| flag))
            .collect();
        let unique: HashSet<&str> = flags.iter().copied().collect();
        assert_eq!(unique.len(), flags.len(), "duplicate flag in {args:?}");
        assert_eq!(flags.len(), OptionFlag::ALL.len());
        assert!(!args.contains(&"--json".to_string()));
    }
}

#[test]
fn pdf_mode_emits_every_option_flag() {
    let options = PdfOptions {
        grid_font_size: 18,
        word_bank_font_size: 10,
        page_size: PageSize::A4,
        margin: 20,
        title: "Animals".to_string(),
        title_font_size: 30,
        rows: 12,
        cols: 14,
    };
    let args = strings(&build_args(
        Path::new("words.txt"),
        &pdf_mode("animals.pdf"),
        &options,
    ));

    assert_eq!(flag_value(&args, "--grid-font-size"), Some("18"));
    assert_eq!(flag_value(&args, "--word-bank-font-size"), Some("10"));
    assert_eq!(flag_value(&args, "--size"), Some("a4"));
    assert_eq!(flag_value(&args, "--margin"), Some("20"));
    assert_eq!(flag_value(&args, "--title"), Some("Animals"));
    assert_eq!(flag_value(&args, "--title-font-size"), Some("30"));
    assert_eq!(flag_value(&args, "--rows"), Some("12"));
    assert_eq!(flag_value(&args, "--cols"), Some("14"));
}

#[test]
fn generator_parses_titles_that_look_like_flags() {
    for title in ["Animals", "- Week 3 -", "-Spelling-", "-o", "--json", ""] {
        let options = PdfOptions {
            title: title.to_string(),
            ..PdfOptions::default()
        };
        let args = build_args(Path::new("words.txt"), &pdf_mode("out.pdf"), &options);

        let parsed = parse_as_generator(&args)
            .unwrap_or_else(|err| panic!("title {title:?} rejected: {err}"));
        assert_eq!(parsed.title, title);
        assert_eq!(parsed.output, "out.pdf");
        assert_eq!(parsed.filename, "words.txt");
        assert!(!parsed.json);
    }
}

#[test]
fn generator_parses_every_option_back() {
    let options = PdfOptions {
        grid_font_size: 18,
        word_bank_font_size: 10,
        page_size: PageSize::Custom {
            width: 400,
            height: 500,
        },
        margin: 20,
        title: "Fruit".to_string(),
        title_font_size: 30,
        rows: 12,
        cols: 14,
    };
    let args = build_args(Path::new("words.txt"), &pdf_mode("fruit.pdf"), &options);
    let parsed = parse_as_generator(&args).expect("generator accepts args");

    assert_eq!(parsed.grid_font_size, 18.0);
    assert_eq!(parsed.word_bank_font_size, 10.0);
    assert_eq!(parsed.size, "400,500");
    assert_eq!(parsed.margin, 20.0);
    assert_eq!(parsed.title_font_size, 30.0);
    assert_eq!((parsed.rows, parsed.cols), (12, 14));
}

#[test]
fn relative_output_path_starting_with_dash_is_prefixed() {
    let args = build_args(
        Path::new("words.txt"),
        &pdf_mode("-draft.pdf"),
        &PdfOptions::default(),
    );
    let parsed = parse_as_generator(&args).expect("generator accepts args");
    assert_eq!(
        PathBuf::from(parsed.output),
        Path::new(".").join("-draft.pdf")
    );

    let plain = strings(&build_args(
        Path::new("words.txt"),
        &pdf_mode("draft.pdf"),
        &PdfOptions::default(),
    ));
    assert_eq!(flag_value(&plain, "-o"), Some("draft.pdf"));
}

#[test]
fn size_flag_uses_comma_joined_dimensions_for_custom_pages() {
    for (width, height) in [(0, 0), (612, 792), (1000, 1), (300, 450)] {
        let options = PdfOptions {
            page_size: PageSize::Custom { width, height },
            ..PdfOptions::default()
        };
        let args = strings(&build_args(
            Path::new("words.txt"),
            &pdf_mode("out.pdf"),
            &options,
        ));
        let expected = format!("{width},{height}");
        assert_eq!(flag_value(&args, "--size"), Some(expected.as_str()));
    }
}

#[test]
fn size_flag_uses_preset_names_verbatim() {
    for (page_size, expected) in [(PageSize::Letter, "letter"), (PageSize::A4, "a4")] {
        let options = PdfOptions {
            page_size,
            ..PdfOptions::default()
        };
        let args = strings(&build_args(
            Path::new("words.txt"),
            &pdf_mode("out.pdf"),
            &options,
        ));
        assert_eq!(flag_value(&args, "--size"), Some(expected));
    }
}

#[test]
fn json_mode_omits_output_and_layout_flags() {
    let options = PdfOptions {
        rows: 8,
        cols: 9,
        ..PdfOptions::default()
    };
    let raw = build_args(Path::new("words.txt"), &OutputMode::Json, &options);
    assert_eq!(
        strings(&raw),
        vec!["words.txt", "--json", "--rows=8", "--cols=9"]
    );

    let parsed = parse_as_generator(&raw).expect("generator accepts args");
    assert!(parsed.json);
    assert_eq!((parsed.rows, parsed.cols), (8, 9));
}

#[test]
fn display_args_quotes_values_with_spaces() {
    let args: Vec<OsString> = vec!["words.txt".into(), "--title=My Puzzle".into()];
    assert_eq!(display_args(&args), r#"words.txt "--title=My Puzzle""#);
}

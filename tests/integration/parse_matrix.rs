use cessa_vault::tooling::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["vault", "root"],
        vec!["vault", "departments", "--format", "json"],
        vec!["vault", "courses", "cs"],
        vec!["vault", "materials", "cs"],
        vec![
            "vault",
            "materials",
            "cs",
            "--search",
            "smith",
            "--course",
            "ds",
            "--type",
            "slides",
            "--sort",
            "instructor",
        ],
        vec!["vault", "files", "cs", "ds", "smith", "slides"],
        vec!["vault", "config", "--format", "json"],
        vec!["vault", "--data-root", "/srv/data", "departments"],
        vec!["vault", "departments", "--log-level", "debug"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_incomplete_leaf_path() {
    assert!(Cli::try_parse_from(["vault", "files", "cs", "ds", "smith"]).is_err());
    assert!(Cli::try_parse_from(["vault", "courses"]).is_err());
    assert!(Cli::try_parse_from(["vault", "scan"]).is_err());
}

#[test]
fn materials_defaults() {
    let cli = Cli::try_parse_from(["vault", "materials", "cs"]).unwrap();
    match cli.command {
        Commands::Materials {
            sort,
            format,
            search,
            ..
        } => {
            assert_eq!(sort, "course");
            assert_eq!(format, "text");
            assert_eq!(search, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

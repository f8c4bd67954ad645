use super::*;
use crate::context::AppContext;

fn repos(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("NEVER"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("false"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("whatever"), ColorChoice::Auto);
}

#[test]
fn test_image_tag_prefixes_host() {
    let item = ImageTag::new("reg.example.com:5000", "library/nginx", "1.25");

    assert_eq!(item.repository, "reg.example.com:5000/library/nginx");
    assert_eq!(item.tag, "1.25");
}

#[test]
fn test_layout_width_uses_longest_name() {
    let layout = TableLayout::for_catalog("host", &repos(&["a", "bb"]));

    // "bb" (2) + "host" (4) + 3
    assert_eq!(layout.repository_width, 9);
    assert_eq!(layout.tag_width, TAG_COLUMN_WIDTH);
}

#[test]
fn test_layout_width_is_by_length_not_lexicographic() {
    // "zz" is the lexicographic maximum but "aaaaaaaa" is longer
    let layout = TableLayout::for_catalog("reg", &repos(&["aaaaaaaa", "zz"]));

    assert_eq!(layout.repository_width, 8 + 3 + 3);
}

#[test]
fn test_layout_width_for_empty_catalog() {
    let layout = TableLayout::for_catalog("reg.example.com", &[]);

    assert_eq!(layout.repository_width, 15 + 3);
}

#[test]
fn test_layout_width_counts_characters() {
    let layout = TableLayout::for_catalog("h", &repos(&["äöü"]));

    assert_eq!(layout.repository_width, 3 + 1 + 3);
}

#[test]
fn test_header_is_padded_to_widths() {
    let layout = TableLayout {
        repository_width: 12,
        tag_width: 5,
    };

    assert_eq!(layout.header(), "REPOSITORY   TAG  ");
}

#[test]
fn test_row_every_repository_cell_fits_its_column() {
    let catalog = repos(&["a", "library/nginx", "team/service/api"]);
    let layout = TableLayout::for_catalog("reg.example.com:5000", &catalog);

    for repo in &catalog {
        let item = ImageTag::new("reg.example.com:5000", repo, "latest");
        let row = layout.format_row(&item.repository, &item.tag);

        assert_eq!(&row[layout.repository_width..layout.repository_width + 1], " ");
        assert!(row.starts_with(&item.repository));
        assert_eq!(row.len(), layout.repository_width + 1 + layout.tag_width);
    }
}

#[test]
fn test_row_does_not_truncate_long_tags() {
    let layout = TableLayout::for_catalog("h", &repos(&["r"]));
    let tag = "sha-0123456789abcdef0123456789abcdef";

    let row = layout.format_row("h/r", tag);

    assert!(row.ends_with(tag));
}

#[test]
fn test_write_header_and_rows() {
    let layout = TableLayout::for_catalog("host", &repos(&["a", "bb"]));
    let mut out = Vec::new();

    layout.write_header(&mut out).unwrap();
    layout
        .write_row(&mut out, &ImageTag::new("host", "a", "v1"))
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["REPOSITORY", "TAG"]);
    assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["host/a", "v1"]);
}

#[test]
fn test_format_vec_json() {
    let items = vec![
        ImageTag::new("host", "a", "v1"),
        ImageTag::new("host", "bb", "latest"),
    ];

    let output = format_output_vec(&items, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json[0]["repository"], "host/a");
    assert_eq!(json[0]["tag"], "v1");
    assert_eq!(json[1]["repository"], "host/bb");
}

#[test]
fn test_format_vec_yaml() {
    let items = vec![ImageTag::new("host", "a", "v1")];

    let output = format_output_vec(&items, OutputFormat::Yaml).unwrap();

    assert!(output.contains("repository: host/a"));
    assert!(output.contains("tag: v1"));
}

#[test]
fn test_format_vec_empty_json() {
    let items: Vec<ImageTag> = vec![];

    assert_eq!(format_output_vec(&items, OutputFormat::Json).unwrap(), "[]");
}

#[test]
fn test_format_vec_rejects_pretty() {
    let items: Vec<ImageTag> = vec![];

    assert!(format_output_vec(&items, OutputFormat::Pretty).is_err());
}

#[test]
fn test_print_respects_verbosity_hierarchy() {
    let ctx = AppContext::build(Some(ColorChoice::Never), VerbosityLevel::Verbose);
    let mut err = Vec::new();

    print(&ctx, &mut err, VerbosityLevel::Verbose, "shown");
    print(&ctx, &mut err, VerbosityLevel::VeryVerbose, "suppressed");
    print(&ctx, &mut err, VerbosityLevel::Trace, "suppressed");

    assert_eq!(String::from_utf8(err).unwrap(), "shown\n");
}

#[test]
fn test_print_with_normal_verbosity_suppresses_verbose() {
    let ctx = AppContext::build(Some(ColorChoice::Never), VerbosityLevel::Normal);
    let mut err = Vec::new();

    print(&ctx, &mut err, VerbosityLevel::Verbose, "suppressed");

    assert!(err.is_empty());
}

#[test]
fn test_error_without_color() {
    let ctx = AppContext::build(Some(ColorChoice::Never), VerbosityLevel::Normal);
    let mut err = Vec::new();

    error(&ctx, &mut err, "boom");

    assert_eq!(String::from_utf8(err).unwrap(), "✗ boom\n");
}

#[test]
fn test_error_mark_with_color_contains_mark() {
    let ctx = AppContext::build(Some(ColorChoice::Always), VerbosityLevel::Normal);

    let mark = error_mark(&ctx);
    assert!(mark.contains("✗"));
    assert!(mark.contains("\u{1b}["));
}

use gnuscript_rs::{Error, Gnuplot, Style};
use std::io::{self, Write};

fn lines_of(buf: &[u8]) -> Vec<String> {
    String::from_utf8(buf.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn count_trimmed(lines: &[String], want: &str) -> usize {
    lines.iter().filter(|l| l.trim() == want).count()
}

const TERMINATOR: [&str; 3] = [
    "'-' linetype bgnd",
    "1.7976931348623157e308 1.7976931348623157e308",
    "e",
];

#[test]
fn svg_header_comes_first() {
    let mut buf = Vec::new();
    let p = Gnuplot::new(&mut buf, "out/abc.svg", 600, 600).unwrap();
    p.quit().unwrap();
    let lines = lines_of(&buf);
    assert_eq!(
        lines[0],
        "set terminal svg size 600,600 background rgb '#FFFFFF' font 'Cambria Math,8'"
    );
    assert_eq!(lines[1], "set output 'out/abc.svg'");
    assert_eq!(lines[2], "set termoption dashed");
}

#[test]
fn unsupported_extension_writes_nothing() {
    let mut buf = Vec::new();
    let r = Gnuplot::new(&mut buf, "abc.bmp", 600, 600);
    assert!(matches!(r, Err(Error::UnsupportedFormat { .. })));
    assert!(buf.is_empty());
}

#[test]
fn uppercase_extension_writes_nothing() {
    let mut buf = Vec::new();
    let r = Gnuplot::new(&mut buf, "abc.SVG", 600, 600);
    match r {
        Err(Error::UnsupportedFormat { ext }) => assert_eq!(ext, ".SVG"),
        Err(other) => panic!("unexpected: {other:?}"),
        Ok(_) => panic!("uppercase extension accepted"),
    }
    assert!(buf.is_empty());
}

#[test]
fn bare_dot_svg_name_is_accepted() {
    let mut buf = Vec::new();
    Gnuplot::new(&mut buf, ".svg", 600, 600).unwrap().quit().unwrap();
    let lines = lines_of(&buf);
    assert!(lines[0].starts_with("set terminal svg size 600,600"));
    assert_eq!(lines[1], "set output '.svg'");
}

#[test]
fn png_and_canvas_devices() {
    for (path, device) in [("a.png", "pngcairo"), ("a.htm", "canvas"), ("a.html", "canvas")] {
        let mut buf = Vec::new();
        Gnuplot::with_terminal_style(&mut buf, path, 320, 200, "")
            .unwrap()
            .quit()
            .unwrap();
        assert_eq!(lines_of(&buf)[0], format!("set terminal {device} size 320,200"));
    }
}

#[test]
fn nested_with_is_balanced_at_every_depth() {
    fn nest(p: &mut Gnuplot<&mut Vec<u8>>, depth: usize) -> gnuscript_rs::Result<()> {
        if depth == 0 {
            return p.emit("leaf");
        }
        let before = p.indent_level();
        p.with(&format!("opt{depth}"), |p| nest(p, depth - 1))?;
        assert_eq!(p.indent_level(), before);
        Ok(())
    }
    for depth in 0..6 {
        let mut buf = Vec::new();
        let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
        nest(&mut p, depth).unwrap();
        assert_eq!(p.indent_level(), 0);
        p.quit().unwrap();
        let lines = lines_of(&buf);
        let sets = lines.iter().filter(|l| l.trim_start().starts_with("set opt")).count();
        let unsets = lines.iter().filter(|l| l.trim_start().starts_with("unset opt")).count();
        assert_eq!(sets, depth);
        assert_eq!(unsets, depth);
        let leaf = format!("{}leaf", "    ".repeat(depth));
        assert!(lines.contains(&leaf), "{lines:?}");
    }
}

#[test]
fn plot_clauses_continue_until_terminator() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
    p.plot(|p| {
        p.lines(["t,2*t+1", "t,-t"])?;
        p.inline_points(["1 2", "3 4"])?;
        p.points(["0.5 0.5"])
    })
    .unwrap();
    assert_eq!(p.indent_level(), 0);
    drop(p);

    let lines = lines_of(&buf)[3..].to_vec();
    assert_eq!(lines[0], "plot \\");
    let (clauses, tail) = lines[1..].split_at(lines.len() - 1 - TERMINATOR.len());
    for l in clauses {
        // data header and rows of the inline block
        if l.trim_start().starts_with("'-'") || l.starts_with("        ") {
            continue;
        }
        assert!(l.ends_with('\\'), "missing continuation: {l:?}");
    }
    assert!(clauses.iter().any(|l| l == "    e,\\"));
    let tail: Vec<&str> = tail.iter().map(|s| s.trim_start()).collect();
    assert_eq!(tail, TERMINATOR);
}

#[test]
fn multiplot_draws_border_once() {
    for panels in [0, 1, 5] {
        let mut buf = Vec::new();
        let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
        p.multiplot(|p| {
            for i in 0..panels {
                p.plot(|p| p.points([format!("{i} {i}")]))?;
            }
            Ok(())
        })
        .unwrap();
        p.quit().unwrap();

        let lines = lines_of(&buf);
        assert_eq!(count_trimmed(&lines, "plot \\"), panels + 1);
        assert_eq!(count_trimmed(&lines, "set border"), 1);
        assert_eq!(count_trimmed(&lines, "set tics"), 1);

        let start = lines.iter().position(|l| l == "set multiplot").unwrap();
        assert_eq!(
            &lines[start + 1..start + 5],
            ["    unset key", "    unset tics", "    unset border", "    unset raxis"]
        );
        let n = lines.len();
        assert_eq!(lines[n - 1], "quit");
        assert_eq!(lines[n - 2], "unset multiplot");
        assert_eq!(lines[n - 3], "        e");
        assert_eq!(lines[n - 6], "    plot \\");
        assert_eq!(lines[n - 7], "    set border");
        assert_eq!(lines[n - 8], "    set tics");
    }
}

#[test]
fn style_changes_apply_forward_only() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
    p.plot(|p| {
        p.points(["1 1"])?;
        p.style.color = "rgb 'red'".into();
        p.style.point_size = 1.5;
        p.points(["2 2"])
    })
    .unwrap();
    drop(p);
    let lines = lines_of(&buf);
    assert_eq!(
        lines[4],
        "    \"<echo 1 1\" with points pointtype 7 pointsize 0.5 linecolor -1,\\"
    );
    assert_eq!(
        lines[5],
        "    \"<echo 2 2\" with points pointtype 7 pointsize 1.5 linecolor rgb 'red',\\"
    );
}

#[test]
fn end_to_end_order_matches_calls() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "abc.svg", 600, 600).unwrap();
    p.xrange(-3.9, 3.9).unwrap();
    p.yrange(-3.9, 3.9).unwrap();
    p.margin(3).unwrap();
    p.circle(0.0, 0.0, 3.0).unwrap();
    p.plot(|p| p.points(["1.0 2.0"])).unwrap();
    p.quit().unwrap();

    let lines = lines_of(&buf);
    let expected = [
        "set xrange [-3.9:3.9]",
        "set yrange [-3.9:3.9]",
        "set rmargin 3",
        "set lmargin 3",
        "set tmargin 3",
        "set bmargin 3",
        "set object circle at 0,0 size 3 fillcolor rgb '#000000' fillstyle empty linewidth 0.2",
        "plot \\",
        "    \"<echo 1.0 2.0\" with points pointtype 7 pointsize 0.5 linecolor -1,\\",
        "    '-' linetype bgnd",
        "    1.7976931348623157e308 1.7976931348623157e308",
        "    e",
        "quit",
    ];
    assert_eq!(&lines[3..], expected);
}

#[test]
fn inverted_range_is_passed_through() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
    p.xrange(5.0, -5.0).unwrap();
    drop(p);
    assert_eq!(lines_of(&buf)[3], "set xrange [5:-5]");
}

#[test]
fn with_style_scopes_line_kind() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
    let dotted = Style {
        line_kind: gnuscript_rs::style::DOTTED_LINE.into(),
        ..Style::default()
    };
    p.plot(|p| {
        p.with_style(dotted, |p| p.lines(["t, 0"]))?;
        p.lines(["0, t"])
    })
    .unwrap();
    drop(p);
    let lines = lines_of(&buf);
    assert!(lines[4].contains("linetype 3 "));
    assert!(lines[5].contains("linetype -1 "));
}

/// Accepts the first `ok` writes, then fails.
struct FlakySink {
    ok: usize,
    written: Vec<u8>,
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.ok == 0 {
            return Err(io::Error::other("disk full"));
        }
        self.ok -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_without_closing_scope() {
    let mut sink = FlakySink {
        ok: 4,
        written: Vec::new(),
    };
    let mut p = Gnuplot::new(&mut sink, "a.svg", 1, 1).unwrap();
    let r = p.with("parametric", |p| p.emit("never written"));
    assert!(matches!(r, Err(Error::Io(_))));
    drop(p);
    let text = String::from_utf8(sink.written).unwrap();
    assert!(text.ends_with("set parametric\n"));
    assert!(!text.contains("unset parametric"));
}

#[test]
fn body_error_propagates() {
    let mut buf = Vec::new();
    let mut p = Gnuplot::new(&mut buf, "a.svg", 1, 1).unwrap();
    let r = p.plot(|_| Err(Error::UnsupportedFormat { ext: ".x".into() }));
    assert!(r.is_err());
}

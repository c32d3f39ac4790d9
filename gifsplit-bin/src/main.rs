// main.rs      gifsplit command
//
// Copyright (c) 2019-2025  Douglas Lau
//
#![forbid(unsafe_code)]

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use gifsplit::{
    AnimationFrame, Decoder, DisposalMode, ExtractReport, Extractor,
    FrameRecord, Stride,
};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::process::ExitCode;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Crate version
const VERSION: &str = std::env!("CARGO_PKG_VERSION");

/// Default artifact name template
const DEFAULT_NAME: &str = "frame_";

/// Main entry point
fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::builder().format_timestamp(None).init();
    let mut out = StandardStream::stdout(ColorChoice::Auto);
    let success = match create_app().get_matches().subcommand() {
        ("show", Some(matches)) => show(&mut out, matches)?,
        ("extract", Some(matches)) => extract(&mut out, matches)?,
        ("export", Some(matches)) => export(&mut out, matches)?,
        ("unwrap", Some(matches)) => unwrap(&mut out, matches)?,
        _ => unreachable!(),
    };
    out.reset()?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Create clap App
fn create_app() -> App<'static, 'static> {
    let name = Arg::with_name("name")
        .short("n")
        .long("name")
        .takes_value(true)
        .default_value(DEFAULT_NAME)
        .help("frame file name template");
    let stride = Arg::with_name("stride")
        .short("s")
        .long("stride")
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value("1")
        .help("step between extracted frames");
    let accurate = Arg::with_name("accurate")
        .short("a")
        .long("accurate")
        .help("apply frame disposal methods");
    App::new("gifsplit")
        .version(VERSION)
        .setting(AppSettings::GlobalVersion)
        .about("GIF frame extraction utility")
        .setting(AppSettings::ArgRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("show")
                .about("Show GIF frame table")
                .arg(
                    Arg::with_name("files")
                        .required(true)
                        .min_values(1)
                        .help("input file(s)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("extract")
                .about("Extract frames from a GIF as JSON")
                .arg(Arg::with_name("file").required(true).help("input file"))
                .arg(name.clone())
                .arg(stride.clone())
                .arg(accurate.clone()),
        )
        .subcommand(
            SubCommand::with_name("export")
                .about("Export extracted frames to PNG files")
                .arg(
                    Arg::with_name("report")
                        .required(true)
                        .help("extract report (JSON)"),
                )
                .arg(
                    Arg::with_name("dir")
                        .required(true)
                        .help("output directory"),
                )
                .arg(name.clone()),
        )
        .subcommand(
            SubCommand::with_name("unwrap")
                .about("Unwrap frames from a GIF into PNG files")
                .arg(Arg::with_name("file").required(true).help("input file"))
                .arg(
                    Arg::with_name("dir")
                        .required(true)
                        .help("output directory"),
                )
                .arg(name)
                .arg(stride)
                .arg(accurate),
        )
}

/// Create an extractor from matches
fn extractor(matches: &ArgMatches) -> Result<Extractor, Box<dyn Error>> {
    let stride: i64 = matches.value_of("stride").unwrap_or("1").parse()?;
    let mode = if matches.is_present("accurate") {
        DisposalMode::Accurate
    } else {
        DisposalMode::PaintOver
    };
    let name = matches.value_of("name").unwrap_or(DEFAULT_NAME);
    Ok(Extractor::new(name)
        .with_stride(Stride::try_from(stride)?)
        .with_disposal_mode(mode))
}

/// Handle extract subcommand
fn extract(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<bool, Box<dyn Error>> {
    let path = matches.value_of_os("file").ok_or("missing file")?;
    let report = match extractor(matches) {
        Ok(extractor) => extractor.extract_report(path),
        Err(e) => ExtractReport::failed(e.to_string()),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.success)
}

/// Read frame records from an extract report, or a bare array of records
fn read_records(path: &OsStr) -> Result<Vec<FrameRecord>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    match serde_json::from_str::<ExtractReport>(&json) {
        Ok(report) => Ok(report.frames),
        Err(_) => Ok(serde_json::from_str(&json)?),
    }
}

/// Handle export subcommand
fn export(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<bool, Box<dyn Error>> {
    let path = matches.value_of_os("report").ok_or("missing report")?;
    let dir = matches.value_of_os("dir").ok_or("missing dir")?;
    let name = matches.value_of("name").unwrap_or(DEFAULT_NAME);
    let records = read_records(path)?;
    let report = gifsplit::export(&records, dir, name);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.success)
}

/// Handle unwrap subcommand
fn unwrap(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<bool, Box<dyn Error>> {
    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red)).set_intense(true);
    let mut bold = ColorSpec::new();
    bold.set_fg(Some(Color::White))
        .set_intense(true)
        .set_bold(true);
    let mut dflt = ColorSpec::new();
    dflt.set_fg(Some(Color::White));
    let path = matches.value_of_os("file").ok_or("missing file")?;
    let dir = matches.value_of_os("dir").ok_or("missing dir")?;
    let name = matches.value_of("name").unwrap_or(DEFAULT_NAME);
    let report = match extractor(matches) {
        Ok(extractor) => extractor.extract_report(path),
        Err(e) => ExtractReport::failed(e.to_string()),
    };
    if !report.success {
        out.set_color(&red)?;
        writeln!(out, "{}", report.message)?;
        return Ok(false);
    }
    let exported = gifsplit::export(&report.frames, dir, name);
    if !exported.success {
        out.set_color(&red)?;
        writeln!(out, "{}", exported.message)?;
        return Ok(false);
    }
    for frame in &report.frames {
        out.set_color(&dflt)?;
        write!(out, "{:>8}", frame.size)?;
        out.set_color(&bold)?;
        writeln!(out, " {}", gifsplit::frame_name(name, frame.index))?;
    }
    out.set_color(&bold)?;
    writeln!(
        out,
        "{} of {} frames, {} written",
        report.extracted_frames, report.total_frames, exported.exported_count
    )?;
    Ok(exported.exported_count == report.extracted_frames)
}

/// Handle show subcommand
fn show(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<bool, Box<dyn Error>> {
    let values = matches.values_of_os("files").ok_or("missing files")?;
    for path in values {
        show_file(out, path)?;
    }
    Ok(true)
}

/// Show one GIF file
fn show_file(
    out: &mut StandardStream,
    path: &OsStr,
) -> Result<(), Box<dyn Error>> {
    let mut magenta = ColorSpec::new();
    magenta.set_fg(Some(Color::Magenta));
    let mut yellow = ColorSpec::new();
    yellow.set_fg(Some(Color::Yellow)).set_intense(true);
    let mut bold = ColorSpec::new();
    bold.set_fg(Some(Color::White))
        .set_intense(true)
        .set_bold(true);
    let seq = Decoder::open(path)?.into_sequence()?;
    let frame_digits = digits(seq.len()).max(3);
    let width = seq.width();
    let height = seq.height();
    let size_digits = 4.max(1 + digits(width) + digits(height));
    out.set_color(&magenta)?;
    writeln!(out, "{:?}", path)?;
    out.set_color(&bold)?;
    writeln!(out, "{}x{}, frames: {}", width, height, seq.len())?;
    out.set_color(&yellow)?;
    write!(out, "{:>w$}", "Fr#", w = frame_digits)?;
    write!(out, "  Delay Disp")?;
    write!(out, " {:>w$}", "Size", w = size_digits)?;
    writeln!(out, " {:>w$}", "X,Y", w = size_digits)?;
    for (n, f) in seq.frames().iter().enumerate() {
        show_frame(f, out, width, height, n, frame_digits, size_digits)?;
    }
    Ok(())
}

/// Show one frame of a GIF file
fn show_frame(
    frame: &AnimationFrame,
    out: &mut StandardStream,
    width: u32,
    height: u32,
    number: usize,
    frame_digits: usize,
    size_digits: usize,
) -> Result<(), Box<dyn Error>> {
    let mut dflt = ColorSpec::new();
    dflt.set_fg(Some(Color::White));
    let mut bold = ColorSpec::new();
    bold.set_fg(Some(Color::White))
        .set_intense(true)
        .set_bold(true);
    out.set_color(&bold)?;
    write!(out, "{:>w$}", number, w = frame_digits)?;
    let d = frame.delay_time_cs();
    if d == 0 {
        out.set_color(&dflt)?;
    }
    write!(out, " {:6.2}", d as f32 / 100f32)?;
    let disp = frame.disposal().label();
    out.set_color(if disp == "-" { &dflt } else { &bold })?;
    write!(out, " {:>4}", disp)?;
    if width == frame.width() && height == frame.height() {
        out.set_color(&dflt)?;
    } else {
        out.set_color(&bold)?;
    }
    write!(
        out,
        " {:>w$}",
        &format!("{}x{}", frame.width(), frame.height()),
        w = size_digits
    )?;
    if frame.left() == 0 && frame.top() == 0 {
        out.set_color(&dflt)?;
    } else {
        out.set_color(&bold)?;
    }
    writeln!(
        out,
        " {:>w$}",
        &format!("{},{}", frame.left(), frame.top()),
        w = size_digits
    )?;
    Ok(())
}

/// Calculate digits in a number
fn digits<T: TryInto<usize>>(v: T) -> usize {
    match v.try_into().unwrap_or(usize::MAX) {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        1000..=9999 => 4,
        _ => 5,
    }
}

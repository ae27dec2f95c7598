use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use log::{debug, error};
use structopt::clap::AppSettings;
use structopt::StructOpt;

use wordcount_core::{Error, FrequencyTable, Mode, Report, DEFAULT_TOP_LIMIT};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wordcount",
    about = "Case-insensitive word frequency report.",
    settings = &[
        AppSettings::AllowLeadingHyphen,
        AppSettings::DisableHelpFlags,
        AppSettings::DisableVersion,
    ]
)]
struct Opt {
    /// --count for every word alphabetically, --topcount for the most common
    mode: Mode,

    #[structopt(parse(from_os_str))]
    file: PathBuf,
}

/// Exactly `<mode> <file>`. The count and the mode are checked on the raw
/// arguments so clap never gets to reinterpret `--` or a flag-like mode.
fn parse_args<I>(args: I) -> Result<Opt, Error>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() != 3 {
        return Err(Error::Usage);
    }
    args[1].to_string_lossy().parse::<Mode>()?;

    // `--` ahead of the file keeps a path such as `-x` positional.
    let argv = vec![
        args[0].clone(),
        args[1].clone(),
        OsString::from("--"),
        args[2].clone(),
    ];
    let opt = Opt::from_iter_safe(argv).map_err(|_| Error::Usage)?;
    debug!("Configuration: {:?}", opt);
    Ok(opt)
}

fn print_report(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report.write_to(&mut out)
}

fn fail(err: Error) -> ! {
    if err.is_usage() {
        let _ = writeln!(io::stdout(), "{}", err);
    } else {
        error!("{}", err);
        eprintln!("error: {}", err);
    }
    process::exit(err.exit_code());
}

fn main() {
    env_logger::init();

    let opt = parse_args(std::env::args_os()).unwrap_or_else(|err| fail(err));
    let table = FrequencyTable::from_path(&opt.file).unwrap_or_else(|err| fail(err));

    let report = match opt.mode {
        Mode::Count => Report::alphabetical(&table),
        Mode::TopCount => Report::top(&table, DEFAULT_TOP_LIMIT),
    };
    debug!("Printing {} entries for {}", report.len(), opt.mode);

    if let Err(err) = print_report(&report) {
        error!("Failed writing report: {}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

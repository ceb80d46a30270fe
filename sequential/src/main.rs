use app_wc::word_frequency;
use common::{init_logger, sorted, Frequencies, Result};
use log::info;
use std::io::{stdout, Write};
use structopt::StructOpt;

const TEXT: &str = "Four, One two two three Three three four  four   four";

#[derive(StructOpt, Debug)]
struct Opt {
    /// Print words in lexicographic order instead of map order
    #[structopt(short, long)]
    sorted: bool,
}

fn write_frequencies(out: &mut impl Write, freq: &Frequencies, sort: bool) -> Result<()> {
    if sort {
        for (word, count) in sorted(freq) {
            writeln!(out, "{} => {}", word, count)?;
        }
    } else {
        for (word, count) in freq {
            writeln!(out, "{} => {}", word, count)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logger();
    let opt = Opt::from_args();

    let freq = word_frequency(TEXT);
    info!("counted {} distinct words", freq.len());

    let stdout = stdout();
    let mut out = stdout.lock();
    write_frequencies(&mut out, &freq, opt.sorted)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(freq: &Frequencies, sort: bool) -> String {
        let mut buf = Vec::new();
        write_frequencies(&mut buf, freq, sort).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sorted_output() {
        let out = render(&word_frequency(TEXT), true);
        assert_eq!(out, "four => 4\none => 1\nthree => 3\ntwo => 2\n");
    }

    #[test]
    fn unsorted_output_has_every_entry() {
        let out = render(&word_frequency(TEXT), false);
        let mut lines: Vec<_> = out.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["four => 4", "one => 1", "three => 3", "two => 2"]);
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(render(&Frequencies::new(), false), "");
        assert_eq!(render(&Frequencies::new(), true), "");
    }
}

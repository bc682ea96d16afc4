use std::time::Duration;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("", "paused", "start the simulation paused");
        opts.optopt("s", "size", "grid dimension (cells per side)", "SIZE");
        opts.optopt("p", "period", "tick period in milliseconds", "MILLIS");
        opts.optopt("f", "fill", "initial fill type", "TYPE");
        opts.optopt("g", "gens", "stop after this many generations", "COUNT");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: rulegrid [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn size(&self) -> i32 {
        // 50 is the original demo's form default
        self.matches.opt_get("size").unwrap().unwrap_or(50)
    }

    pub fn period(&self) -> Duration {
        let millis: u64 = self.matches.opt_get("period").unwrap().unwrap_or(200);
        Duration::from_millis(millis)
    }

    pub fn generations(&self) -> u64 {
        self.matches.opt_get("gens").unwrap().unwrap_or(u64::MAX) // kinda hacky way of saying "infinity"
    }

    pub fn paused(&self) -> bool {
        self.matches.opt_present("paused")
    }

    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("glider")).expect("valid fill mode string")
    }
}

/// How the grid is populated before the first tick.
pub enum FillMode {
    /// The engine's canonical seed pattern.
    Glider,
    Random,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "glider" => Some(Self::Glider),
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("parsed args")
    }

    #[test]
    fn defaults_match_the_original_form() {
        let args = args(&[]);

        assert_eq!(args.size(), 50);
        assert_eq!(args.period(), Duration::from_millis(200));
        assert!(!args.paused());
        assert!(matches!(args.fill_mode(), FillMode::Glider));
    }

    #[test]
    fn explicit_options_parse() {
        let args = args(&["--size", "12", "--period", "75", "--paused", "--gens", "3"]);

        assert_eq!(args.size(), 12);
        assert_eq!(args.period(), Duration::from_millis(75));
        assert!(args.paused());
        assert_eq!(args.generations(), 3);
    }

    #[test]
    fn fill_mode_parses() {
        assert!(matches!(
            args(&["--fill", "random"]).fill_mode(),
            FillMode::Random
        ));
        assert!(matches!(
            args(&["--fill", "empty"]).fill_mode(),
            FillMode::Empty
        ));
    }
}

fn main() {
    #[cfg(feature = "cli")]
    framerle::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("framerle: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}

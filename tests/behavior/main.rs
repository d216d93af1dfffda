use libtest_mimic::Arguments;
use libtest_mimic::Trial;
use swiftfs::error::Result;


pub use utils::*;

fn main() -> Result<()> {
    let args = Arguments::from_args();

    let mut tests = Vec::new();

    operations::backend::tests(&mut tests);
    operations::cli::tests(&mut tests);
    operations::delete::tests(&mut tests);
    operations::dispatch::tests(&mut tests);
    operations::download::tests(&mut tests);
    operations::list::tests(&mut tests);
    operations::mkdir::tests(&mut tests);
    operations::rmdir::tests(&mut tests);
    operations::upload::tests(&mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let conclusion = libtest_mimic::run(&args, tests);

    conclusion.exit()
}

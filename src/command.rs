// Command validation and dispatch
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use snafu::{OptionExt, ensure};

use crate::error::{
    Error, MissingCommandSnafu, MissingWorkingDirectorySnafu, Result, TooFewArgumentsSnafu,
};
use crate::storage::{ConsoleProgressReporter, StorageAdapter, StorageClient, format_listing};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "The object was successfully created";

/// Verbs accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Put,
    Get,
    Ls,
    Mkdir,
    Chdir,
    Rmdir,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::Put,
        Verb::Get,
        Verb::Ls,
        Verb::Mkdir,
        Verb::Chdir,
        Verb::Rmdir,
        Verb::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Put => "put",
            Verb::Get => "get",
            Verb::Ls => "ls",
            Verb::Mkdir => "mkdir",
            Verb::Chdir => "chdir",
            Verb::Rmdir => "rmdir",
            Verb::Delete => "delete",
        }
    }

    /// Positional arguments the verb cannot run without.
    pub fn min_args(self) -> usize {
        match self {
            Verb::Put | Verb::Get => 2,
            Verb::Ls => 0,
            Verb::Mkdir | Verb::Chdir | Verb::Rmdir | Verb::Delete => 1,
        }
    }

    /// Positional arguments the verb reads; anything beyond is ignored.
    pub fn max_args(self) -> usize {
        match self {
            Verb::Put | Verb::Get => 2,
            Verb::Ls | Verb::Mkdir | Verb::Chdir | Verb::Rmdir | Verb::Delete => 1,
        }
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.name() == s)
            .ok_or_else(|| Error::UnknownCommand {
                verb: s.to_string(),
            })
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated command, ready to run against a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put {
        local_file: PathBuf,
        remote_key: String,
    },
    Get {
        remote_key: String,
        local_file: PathBuf,
    },
    Ls {
        prefix: Option<String>,
    },
    Mkdir {
        path: String,
    },
    Chdir {
        path: String,
    },
    Rmdir {
        path: String,
    },
    Delete {
        key: String,
    },
}

impl Command {
    /// Validate a verb name and its arguments without touching the backend.
    pub fn parse(verb: &str, args: &[String]) -> Result<Self> {
        Self::from_verb(verb.parse()?, args)
    }

    pub fn from_verb(verb: Verb, args: &[String]) -> Result<Self> {
        let min = verb.min_args();
        ensure!(
            args.len() >= min,
            TooFewArgumentsSnafu {
                verb: verb.name(),
                min,
                given: args.len(),
            }
        );
        if args.len() > verb.max_args() {
            log::debug!(
                "ignoring {} extra argument(s) for {verb}",
                args.len() - verb.max_args()
            );
        }

        // Arity was checked above, so indexing up to `min` is in bounds.
        let command = match verb {
            Verb::Put => Command::Put {
                local_file: PathBuf::from(&args[0]),
                remote_key: args[1].clone(),
            },
            Verb::Get => Command::Get {
                remote_key: args[0].clone(),
                local_file: PathBuf::from(&args[1]),
            },
            Verb::Ls => Command::Ls {
                prefix: args.first().cloned(),
            },
            Verb::Mkdir => Command::Mkdir {
                path: args[0].clone(),
            },
            Verb::Chdir => Command::Chdir {
                path: args[0].clone(),
            },
            Verb::Rmdir => Command::Rmdir {
                path: args[0].clone(),
            },
            Verb::Delete => Command::Delete {
                key: args[0].clone(),
            },
        };
        Ok(command)
    }

    pub fn verb(&self) -> Verb {
        match self {
            Command::Put { .. } => Verb::Put,
            Command::Get { .. } => Verb::Get,
            Command::Ls { .. } => Verb::Ls,
            Command::Mkdir { .. } => Verb::Mkdir,
            Command::Chdir { .. } => Verb::Chdir,
            Command::Rmdir { .. } => Verb::Rmdir,
            Command::Delete { .. } => Verb::Delete,
        }
    }

    /// Run the command, writing user-facing output to `out`.
    pub async fn execute<A, W>(&self, client: &StorageClient<A>, out: &mut W) -> Result<()>
    where
        A: StorageAdapter,
        W: Write + Send,
    {
        match self {
            Command::Put {
                local_file,
                remote_key,
            } => {
                let mut progress = ConsoleProgressReporter::new(&mut *out);
                client
                    .upload_file(local_file, remote_key, &mut progress)
                    .await?;
                writeln!(out, "{UPLOAD_SUCCESS_MESSAGE}")?;
            }
            Command::Get {
                remote_key,
                local_file,
            } => {
                client.download_file(remote_key, local_file).await?;
            }
            Command::Ls { prefix } => {
                let entries = client.list_directory(prefix.as_deref()).await?;
                for line in format_listing(&entries) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Mkdir { path } => client.make_directory(path).await?,
            Command::Chdir { path } => writeln!(out, "{path}")?,
            Command::Rmdir { path } => {
                let removed = client.remove_directory(path).await?;
                log::debug!("rmdir path={path} removed={removed}");
            }
            Command::Delete { key } => client.delete_object(key).await?,
        }
        out.flush()?;
        Ok(())
    }
}

/// The positional part of a command line: `<COMMAND> <CWD> [ARGS]...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// Caller's working directory. Informational only.
    pub cwd: String,
}

impl Invocation {
    pub fn parse(command_args: &[String]) -> Result<Self> {
        let (verb, rest) = command_args.split_first().context(MissingCommandSnafu)?;
        let verb: Verb = verb.parse()?;
        let (cwd, args) = rest
            .split_first()
            .context(MissingWorkingDirectorySnafu { verb: verb.name() })?;

        Ok(Self {
            command: Command::from_verb(verb, args)?,
            cwd: cwd.clone(),
        })
    }
}

use std::fmt;
use std::io;

/// Fatal failures of the parallel filter engine.
///
/// Every variant is terminal for the run: nothing is retried and no partial
/// output buffer is ever returned alongside an error.
#[derive(Debug)]
pub enum FilterError {
    /// The output buffer could not be allocated.
    Allocation { requested: usize },
    /// A worker thread could not be created. Workers spawned before the
    /// failure are joined before this error is returned.
    ThreadSpawn { worker: usize, source: io::Error },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { requested } => {
                write!(f, "failed to allocate output buffer of {requested} bytes")
            }
            Self::ThreadSpawn { worker, source } => {
                write!(f, "failed to spawn worker thread {worker}: {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadSpawn { source, .. } => Some(source),
            Self::Allocation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn allocation_error_names_the_requested_size() {
        let err = FilterError::Allocation { requested: 4096 };
        assert_eq!(
            err.to_string(),
            "failed to allocate output buffer of 4096 bytes"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn thread_spawn_error_names_the_worker_and_cause() {
        let err = FilterError::ThreadSpawn {
            worker: 3,
            source: io::Error::new(io::ErrorKind::WouldBlock, "no more threads"),
        };
        assert_eq!(
            err.to_string(),
            "failed to spawn worker thread 3: no more threads"
        );
        assert!(err.source().is_some());
    }
}

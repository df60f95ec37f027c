//! Guaranteed finalization of output artifacts
use anyhow::Result;
use log::error;

/// An output resource with closing syntax that must be written before it is released
pub trait Finalize {
    type Output;

    fn finalize(self) -> Result<Self::Output>;
}

impl<T: Finalize> Finalize for Option<T> {
    type Output = Option<T::Output>;

    fn finalize(self) -> Result<Self::Output> {
        self.map(Finalize::finalize).transpose()
    }
}

/// Runs `body` against `resource` and finalizes the resource afterwards, whether the body
/// succeeded or not. An error from the body takes precedence over one from finalizing.
pub fn finalize_after<R, F>(mut resource: R, body: F) -> Result<R::Output>
where
    R: Finalize,
    F: FnOnce(&mut R) -> Result<()>,
{
    let outcome = body(&mut resource);
    let finalized = resource.finalize();

    match outcome {
        Ok(()) => finalized,
        Err(err) => {
            if let Err(finalize_err) = finalized {
                error!("could not finalize output after failure: {finalize_err}");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Recorder<'a> {
        log: &'a mut Vec<&'static str>,
        fail_finalize: bool,
    }

    impl Finalize for Recorder<'_> {
        type Output = usize;

        fn finalize(self) -> Result<usize> {
            self.log.push("finalize");
            if self.fail_finalize {
                return Err(anyhow!("finalize failed"));
            }
            Ok(self.log.len())
        }
    }

    #[test]
    fn finalizes_after_success() {
        let mut log = Vec::new();
        let recorder = Recorder {
            log: &mut log,
            fail_finalize: false,
        };
        let result = finalize_after(recorder, |r| {
            r.log.push("body");
            Ok(())
        });
        assert_eq!(result.unwrap(), 2);
        assert_eq!(log, vec!["body", "finalize"]);
    }

    #[test]
    fn finalizes_after_failure() {
        let mut log = Vec::new();
        let recorder = Recorder {
            log: &mut log,
            fail_finalize: true,
        };
        let result = finalize_after(recorder, |_| Err(anyhow!("body failed")));
        assert_eq!(result.unwrap_err().to_string(), "body failed");
        assert_eq!(log, vec!["finalize"]);
    }

    #[test]
    fn finalize_error_is_reported() {
        let mut log = Vec::new();
        let recorder = Recorder {
            log: &mut log,
            fail_finalize: true,
        };
        let result = finalize_after(recorder, |_| Ok(()));
        assert_eq!(result.unwrap_err().to_string(), "finalize failed");
    }

    #[test]
    fn absent_resource() {
        let result = finalize_after(None::<Recorder>, |_| Ok(()));
        assert_eq!(result.unwrap(), None);
    }
}

//! Filesystem adapters of the benchmark ports.
//!
//! Layout of the input root:
//!
//! ```text
//! <root>/<patient_id>/episode1_timeseries.csv   event stream
//! <root>/<patient_id>/episode1.csv              static label row
//! ```
//!
//! Layout of a partition output directory:
//!
//! ```text
//! <output>/<partition>/<patient_id>_episode1_timeseries.csv
//! <output>/<partition>/<patient_id>_episode1.csv
//! <output>/<partition>/listfile.csv
//! ```

use std::{io, path::Path};

pub(crate) use self::{ids::*, manifest::*, sink::*, source::*};

mod ids;
mod manifest;
mod sink;
mod source;

fn invalid_data<E>(path: &Path, err: E) -> io::Error
where
    E: std::fmt::Display,
{
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{}: {err}", path.display()),
    )
}

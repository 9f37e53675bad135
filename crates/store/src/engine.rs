//! The storage engine.

use crate::error::{StoreError, StoreResult};
use crate::resolver;
use darkroom_core::{layout, Checksum, Config, ORIGINAL_NAME};
use darkroom_formats::{Format, FormatError, LanczosResizer, Resizer};
use data_url::DataUrl;
use image::DynamicImage;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Content-addressed image store.
///
/// Stateless beyond its configuration; all mutable state is the filesystem,
/// so a single instance is safe to share across threads. Concurrent stores
/// of the same checksum coordinate solely through the filesystem's
/// exclusive-create semantics: for every file, the first writer wins and
/// later writers skip it.
pub struct ImageStore {
    config: Config,
    formats: Vec<Box<dyn Format>>,
    resizer: Box<dyn Resizer>,
}

impl ImageStore {
    /// Create a store using the default Lanczos resizer.
    pub fn new(config: Config, formats: Vec<Box<dyn Format>>) -> StoreResult<Self> {
        Self::with_resizer(config, formats, Box::new(LanczosResizer))
    }

    /// Create a store using a custom resizer.
    pub fn with_resizer(
        config: Config,
        formats: Vec<Box<dyn Format>>,
        resizer: Box<dyn Resizer>,
    ) -> StoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            formats,
            resizer,
        })
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the checksum of raw content.
    pub fn checksum(&self, data: &[u8]) -> String {
        Checksum::compute(data).to_string()
    }

    /// Compute the checksum of the payload embedded in a data URL.
    pub fn checksum_data_url(&self, input: &str) -> StoreResult<String> {
        let (_, data) = decode_data_url(input)?;
        Ok(self.checksum(&data))
    }

    /// Store an image and its configured size variants.
    ///
    /// The first configured format whose media type matches decodes the
    /// payload; each configured size is thumbnailed from the decoded image
    /// and written next to the original. Existing files are never
    /// rewritten. A failure partway through leaves the files written so
    /// far on disk; re-invoking the store fills in whatever is missing.
    #[instrument(skip(self, data), fields(len = data.len()))]
    pub fn store(&self, media_type: &str, data: &[u8]) -> StoreResult<()> {
        let checksum = Checksum::compute(data);
        let format = self
            .format_for(media_type)
            .ok_or_else(|| StoreError::UnsupportedMediaType(media_type.to_string()))?;
        let image = format.decode(data).map_err(StoreError::Decode)?;

        let mut renditions: Vec<(&str, DynamicImage)> =
            Vec::with_capacity(self.config.sizes.len() + 1);
        for size in &self.config.sizes {
            let thumb = self.resizer.thumbnail(size.width, size.height, &image);
            renditions.push((size.name.as_str(), thumb));
        }
        renditions.push((ORIGINAL_NAME, image));

        let dir = layout::absolute_dir(&self.config.root_path, checksum.as_str());
        create_dir_restricted(&dir)?;
        if let Err(err) = self.write_renditions(&dir, &renditions, format) {
            warn!(checksum = %checksum, "store failed partway; files written so far remain on disk");
            return Err(err);
        }
        Ok(())
    }

    /// Store the payload embedded in a data URL.
    #[instrument(skip(self, input))]
    pub fn store_data_url(&self, input: &str) -> StoreResult<()> {
        let (media_type, data) = decode_data_url(input)?;
        self.store(&media_type, &data)
    }

    /// Root-relative path of the stored original.
    pub fn path_for(&self, checksum: &str) -> StoreResult<PathBuf> {
        self.path_for_size(checksum, ORIGINAL_NAME)
    }

    /// Root-relative path of a named size variant.
    #[instrument(skip(self))]
    pub fn path_for_size(&self, checksum: &str, size: &str) -> StoreResult<PathBuf> {
        resolver::resolve_variant_path(&self.config.root_path, checksum, size)
    }

    /// Whether every named size exists for the checksum.
    ///
    /// Total over arbitrary checksum strings: an object that was never
    /// stored answers `Ok(false)`, not an error.
    #[instrument(skip(self, sizes))]
    pub fn has_sizes_for_checksum<S: AsRef<str>>(
        &self,
        checksum: &str,
        sizes: &[S],
    ) -> StoreResult<bool> {
        resolver::has_variants(&self.config.root_path, checksum, sizes)
    }

    /// Load and decode a stored size variant.
    ///
    /// The on-disk encoding is sniffed from the file content, independent
    /// of which configured format wrote it.
    #[instrument(skip(self))]
    pub fn get_size(&self, checksum: &str, size: &str) -> StoreResult<DynamicImage> {
        let rel = self.path_for_size(checksum, size)?;
        let reader = image::ImageReader::open(self.config.root_path.join(rel))?
            .with_guessed_format()?;
        reader
            .decode()
            .map_err(|err| StoreError::Decode(FormatError::Decode(err)))
    }

    /// First configured format matching the media type.
    fn format_for(&self, media_type: &str) -> Option<&dyn Format> {
        self.formats
            .iter()
            .find(|format| format.decodable_media_type() == media_type)
            .map(|format| format.as_ref())
    }

    fn write_renditions(
        &self,
        dir: &Path,
        renditions: &[(&str, DynamicImage)],
        format: &dyn Format,
    ) -> StoreResult<()> {
        for (name, image) in renditions {
            let path = dir.join(format!("{name}.{}", format.encoded_extension()));
            let file = match open_exclusive(&path)? {
                Some(file) => file,
                None => {
                    debug!(path = %path.display(), "file exists, skipping");
                    continue;
                }
            };
            let mut writer = BufWriter::new(file);
            format
                .encode(image, &mut writer)
                .map_err(|source| StoreError::Encode {
                    name: name.to_string(),
                    source,
                })?;
            writer.flush()?;
        }
        Ok(())
    }
}

/// Create the object directory and its parents, mode `rwxr-x---` on Unix.
///
/// Already-existing directories are success; re-stores and concurrent
/// stores sharing a directory prefix must not fail here.
fn create_dir_restricted(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o750);
    }
    builder.create(dir)
}

/// Open a file exclusively for creation, mode `rw-r-----` on Unix.
///
/// Returns `None` when the file already exists; the caller skips it.
fn open_exclusive(path: &Path) -> std::io::Result<Option<File>> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o640);
    }
    match options.open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(None),
        Err(err) => Err(err),
    }
}

/// Decode a data URL into its media type (`type/subtype`) and payload.
fn decode_data_url(input: &str) -> StoreResult<(String, Vec<u8>)> {
    let url = DataUrl::process(input)
        .map_err(|err| StoreError::InvalidDataUrl(format!("{err:?}")))?;
    let (data, _fragment) = url
        .decode_to_vec()
        .map_err(|err| StoreError::InvalidDataUrl(format!("{err:?}")))?;
    let mime = url.mime_type();
    Ok((format!("{}/{}", mime.type_, mime.subtype), data))
}

use crate::cue::error::{CueSheetError, CueSheetResult};
use crate::cue::models::{
    CueFile, CueSheet, FileKind, FileType, Index, MSF, Track, TrackEntry, TrackType,
};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

pub mod error;
pub mod models;

pub struct CueBuilder {
    folder: PathBuf,
}

impl CueBuilder {
    pub fn new(folder: impl AsRef<Path>) -> Self {
        Self {
            folder: folder.as_ref().to_path_buf(),
        }
    }

    /// Scans the folder and writes `<isoBaseName>.cue` next to the disc
    /// image, overwriting any existing file of that name. Returns the path of
    /// the written cue sheet.
    pub async fn generate(&self) -> CueSheetResult<PathBuf> {
        let iso_path = self.locate_disc_image().await?;
        let iso_name = file_name_string(&iso_path);

        println!("{iso_name} found.");

        let mut sheet = CueSheet { tracks: Vec::new() };

        sheet.tracks.push(TrackEntry {
            file: CueFile {
                filename: iso_name,
                file_type: FileType::Binary,
            },
            track: Track {
                number: 1,
                track_type: TrackType::Mode1_2048,
                index: Index {
                    number: 1,
                    position: MSF::ZERO,
                },
                pregap: None,
                postgap: Some(MSF::TWO_SECONDS),
            },
        });

        let mut next_track = 2u8;

        // Audio tracks follow whatever order the platform's directory listing
        // returns, unsorted.
        let mut entries = fs::read_dir(&self.folder).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let path = entry.path();

            let FileKind::Audio(file_type) = FileKind::from_path(&path) else {
                continue;
            };

            let filename = file_name_string(&path);

            println!("{filename} found.");

            let number = next_track;
            next_track += 1;

            sheet.tracks.push(TrackEntry {
                file: CueFile {
                    filename,
                    file_type,
                },
                track: Track {
                    number,
                    track_type: TrackType::Audio,
                    index: Index {
                        number: 1,
                        position: MSF::ZERO,
                    },
                    // A 2-second pregap separates the first audio track from
                    // the data track.
                    pregap: (number == 2).then_some(MSF::TWO_SECONDS),
                    postgap: None,
                },
            });
        }

        self.export(&sheet, &iso_path).await
    }

    async fn locate_disc_image(&self) -> CueSheetResult<PathBuf> {
        let mut images = Vec::new();

        let mut entries = fs::read_dir(&self.folder).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let path = entry.path();

            if FileKind::from_path(&path) == FileKind::DiscImage {
                images.push(path);
            }
        }

        if images.is_empty() {
            return Err(CueSheetError::NoDiscImage(self.folder.clone()));
        }

        if images.len() > 1 {
            return Err(CueSheetError::AmbiguousDiscImage(self.folder.clone()));
        }

        let iso_path = images.remove(0);

        debug!("Located disc image: {iso_path:?}");

        Ok(iso_path)
    }

    async fn export(&self, sheet: &CueSheet, iso_path: &Path) -> CueSheetResult<PathBuf> {
        let stem = iso_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let cue_path = self.folder.join(format!("{stem}.cue"));

        debug!("Writing cue sheet to: {cue_path:?}");

        fs::write(&cue_path, sheet.render()).await?;

        Ok(cue_path)
    }
}

pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

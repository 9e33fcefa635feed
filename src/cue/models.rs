use std::fmt;
use std::path::Path;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Debug, Clone)]
pub struct CueSheet {
    pub tracks: Vec<TrackEntry>,
}

impl CueSheet {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.tracks {
            write!(f, "{entry}")?;
        }

        Ok(())
    }
}

/// A FILE directive together with the single track it backs.
#[derive(Debug, Clone)]
pub struct TrackEntry {
    pub file: CueFile,
    pub track: Track,
}

impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FILE \"{}\" {}{}",
            self.file.filename, self.file.file_type, LINE_ENDING
        )?;
        write!(
            f,
            "  TRACK {:02} {}{}",
            self.track.number, self.track.track_type, LINE_ENDING
        )?;

        // Gap and index lines sit two spaces deeper under the data track than
        // under audio tracks.
        let indent = match self.track.track_type {
            TrackType::Mode1_2048 => "      ",
            TrackType::Audio => "    ",
        };

        if let Some(pregap) = self.track.pregap {
            write!(f, "{indent}PREGAP {pregap}{LINE_ENDING}")?;
        }

        write!(
            f,
            "{indent}INDEX {:02} {}{}",
            self.track.index.number, self.track.index.position, LINE_ENDING
        )?;

        if let Some(postgap) = self.track.postgap {
            write!(f, "{indent}POSTGAP {postgap}{LINE_ENDING}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CueFile {
    pub filename: String,
    pub file_type: FileType,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub number: u8,
    pub track_type: TrackType,
    pub index: Index,
    pub pregap: Option<MSF>,
    pub postgap: Option<MSF>,
}

#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub number: u8,
    pub position: MSF,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MSF {
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl MSF {
    pub const ZERO: MSF = MSF {
        minutes: 0,
        seconds: 0,
        frames: 0,
    };

    pub const TWO_SECONDS: MSF = MSF {
        minutes: 0,
        seconds: 2,
        frames: 0,
    };
}

impl fmt::Display for MSF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Audio,
    Mode1_2048,
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Audio => write!(f, "AUDIO"),
            TrackType::Mode1_2048 => write!(f, "MODE1/2048"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Binary,
    Wave,
    Mp3,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Binary => write!(f, "BINARY"),
            FileType::Wave => write!(f, "WAVE"),
            FileType::Mp3 => write!(f, "MP3"),
        }
    }
}

/// Classification of a folder entry by its extension, lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    DiscImage,
    Audio(FileType),
    Unrecognized,
}

impl FileKind {
    pub fn from_path(path: &Path) -> FileKind {
        let Some(extension) = path.extension().and_then(|s| s.to_str()) else {
            return FileKind::Unrecognized;
        };

        match extension.to_ascii_lowercase().as_str() {
            "iso" => FileKind::DiscImage,
            "mp3" => FileKind::Audio(FileType::Mp3),
            "bin" => FileKind::Audio(FileType::Binary),
            "wav" | "wave" => FileKind::Audio(FileType::Wave),
            _ => FileKind::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn msf_displays_zero_padded() {
        assert_eq!(MSF::ZERO.to_string(), "00:00:00");
        assert_eq!(MSF::TWO_SECONDS.to_string(), "00:02:00");

        let msf = MSF {
            minutes: 70,
            seconds: 3,
            frames: 9,
        };
        assert_eq!(msf.to_string(), "70:03:09");
    }

    #[test]
    fn directive_keywords_render_as_cue_syntax() {
        assert_eq!(TrackType::Audio.to_string(), "AUDIO");
        assert_eq!(TrackType::Mode1_2048.to_string(), "MODE1/2048");
        assert_eq!(FileType::Binary.to_string(), "BINARY");
        assert_eq!(FileType::Wave.to_string(), "WAVE");
        assert_eq!(FileType::Mp3.to_string(), "MP3");
    }

    #[test]
    fn classifies_known_extensions() {
        assert_eq!(
            FileKind::from_path(&PathBuf::from("game.iso")),
            FileKind::DiscImage
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("song.mp3")),
            FileKind::Audio(FileType::Mp3)
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("track2.bin")),
            FileKind::Audio(FileType::Binary)
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("track3.wav")),
            FileKind::Audio(FileType::Wave)
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("track4.wave")),
            FileKind::Audio(FileType::Wave)
        );
    }

    #[test]
    fn classification_ignores_extension_case() {
        assert_eq!(
            FileKind::from_path(&PathBuf::from("GAME.ISO")),
            FileKind::DiscImage
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("TRACK2.BIN")),
            FileKind::Audio(FileType::Binary)
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("Song.Mp3")),
            FileKind::Audio(FileType::Mp3)
        );
    }

    #[test]
    fn other_extensions_are_unrecognized() {
        assert_eq!(
            FileKind::from_path(&PathBuf::from("readme.txt")),
            FileKind::Unrecognized
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("game.cue")),
            FileKind::Unrecognized
        );
        assert_eq!(
            FileKind::from_path(&PathBuf::from("Makefile")),
            FileKind::Unrecognized
        );
    }

    #[test]
    fn renders_data_track_block() {
        let sheet = CueSheet {
            tracks: vec![TrackEntry {
                file: CueFile {
                    filename: "game.iso".to_string(),
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
            }],
        };

        let expected = [
            "FILE \"game.iso\" BINARY",
            "  TRACK 01 MODE1/2048",
            "      INDEX 01 00:00:00",
            "      POSTGAP 00:02:00",
            "",
        ]
        .join(LINE_ENDING);

        assert_eq!(sheet.render(), expected);
    }

    #[test]
    fn renders_audio_track_with_pregap_before_index() {
        let entry = TrackEntry {
            file: CueFile {
                filename: "track2.bin".to_string(),
                file_type: FileType::Binary,
            },
            track: Track {
                number: 2,
                track_type: TrackType::Audio,
                index: Index {
                    number: 1,
                    position: MSF::ZERO,
                },
                pregap: Some(MSF::TWO_SECONDS),
                postgap: None,
            },
        };

        let expected = [
            "FILE \"track2.bin\" BINARY",
            "  TRACK 02 AUDIO",
            "    PREGAP 00:02:00",
            "    INDEX 01 00:00:00",
            "",
        ]
        .join(LINE_ENDING);

        assert_eq!(entry.to_string(), expected);
    }
}

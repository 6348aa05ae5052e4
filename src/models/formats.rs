//! Delivery formats: how a master is transcoded before being delivered.

use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub id: FormatId,
    pub name: String,
    pub specification: FormatSpec,
    pub audio_codec: FormatAudioCodec,
    #[serde(default)]
    pub audio_bitrate: Option<u32>,
    pub start_timecode: Timecode,
    pub frame_rate: FrameRate,
    pub no_frame_rate_conversion: bool,
    #[serde(default)]
    pub ffmpeg_args: Option<String>,
    #[serde(default)]
    pub audio_args: Option<String>,
    #[serde(default)]
    pub bmx_args: Option<String>,
    #[serde(default)]
    pub options: Option<FormatMxfOptions>,
    #[serde(default)]
    pub no_loudness: Option<bool>,
    #[serde(default)]
    pub loudness_range: Option<f64>,
    #[serde(default)]
    pub loudness_program: Option<f64>,
    #[serde(default)]
    pub loudness_true_peak: Option<f64>,
    #[serde(default)]
    pub video_edit: Option<FormatVideoEdit>,
    pub write_timecode: bool,
    #[serde(default)]
    pub video_bitrate: Option<u32>,
    pub encode_subtitle: bool,
    #[serde(default)]
    pub crop: Option<FormatCropParameters>,
    #[serde(default)]
    pub scale: Option<FormatScaleParameters>,
    #[serde(default)]
    pub clip: Option<FormatClipParameters>,
    pub qc_test_plan: String,
    pub qc_report_template: String,
    #[serde(default)]
    pub subtitle_version: Option<Version>,
    #[serde(default)]
    pub subtitle_type_version: Option<SubtitleTypeVersion>,
    #[serde(default)]
    pub subtitle_format: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FormatSpec {
    Mxf,
    Mp4,
    ProRes422,
    ProRes4444,
    #[serde(rename = "ADN")]
    Adn,
    #[serde(rename = "AVCIntra100")]
    AvcIntra100,
    #[serde(rename = "IMX50")]
    Imx50,
    Mp4Salto,
    MovH264,
    MovHevc,
    MxfProgressive,
    Demux,
    AudioExtract,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FormatAudioCodec {
    #[serde(rename = "PCMS24LE")]
    PcmS24Le,
    #[serde(rename = "PCMS16LE")]
    PcmS16Le,
    #[serde(rename = "PCMS24BE")]
    PcmS24Be,
    #[serde(rename = "AAC")]
    Aac,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "MOV_Conteneur")]
    MovContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameRate {
    pub id: String,
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameRate {
    pub fn fps(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormatMxfOptions {
    pub control_instantaneous_bitrate: bool,
    pub as10: bool,
    pub as11: bool,
    pub bwf: bool,
    #[serde(default)]
    pub afd: Option<u32>,
    pub version12: bool,
    pub deinterlacing: bool,
    #[serde(default)]
    pub qmax: Option<u32>,
}

/// Segments inserted before and after the program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatVideoEdit {
    pub before: Vec<FormatSegment>,
    pub after: Vec<FormatSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatSegment {
    pub index: u32,
    pub kind: FormatSegmentKind,
    pub duration: f64,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub source_bucket: Option<Bucket>,
    #[serde(default)]
    pub source_key: Option<ObjectKey>,
    pub subtract: bool,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FormatSegmentKind {
    Mire,
    Black,
    Slate,
    Video,
    Countdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormatCropParameters {
    pub left_px: u32,
    pub right_px: u32,
    pub top_px: u32,
    pub bottom_px: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormatScaleParameters {
    pub width: u32,
    pub height: u32,
    pub scale_aspect_ratio: bool,
    pub scale_letterbox: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatClipParameters {
    pub clip_min: f64,
    pub clip_max: f64,
}

/// A subtitle format of an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleFormatApi {
    pub id: FormatId,
    pub name: String,
    pub file_format: SubtitleFileFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_timecode: Option<Timecode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_frame_rate: Option<FrameRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_standard: Option<SubtitleDisplayStandard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Timecode>,
}

/// Response of `subtitleFormats`.
pub type SubtitleFormats = Vec<SubtitleFormatApi>;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SubtitleFileFormat {
    #[serde(rename = "STL")]
    Stl,
    WebVTT,
    #[serde(rename = "SRT")]
    Srt,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SubtitleDisplayStandard {
    Open,
    Teletext1,
    Teletext2,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubtitleTypeVersion {
    Partial,
    Complete,
    CompleteWithoutPartial,
    Sdh,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SegmentLabel {
    OpeningCredits,
    EndingCredits,
    Introduction,
    Program,
    Trailer,
    Advertising,
    TestPattern,
    Black,
    Slate,
    NeutralBases,
    CustomDelivery,
}

/// Language version.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Version {
    Ara,
    Chi,
    Kor,
    Dan,
    Dut,
    Heb,
    Nld,
    Rus,
    Swe,
    Fra,
    Ger,
    Ita,
    Por,
    Eng,
    Spa,
    Jpn,
    Nor,
    Ukr,
    Int,
    #[serde(rename = "")]
    Nothing,
}

/// Audio layout of a file.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mapping {
    AsMaster,
    NoSound,
    #[serde(rename = "VD")]
    Vd,
    #[serde(rename = "VO")]
    Vo,
    #[serde(rename = "VI")]
    Vi,
    #[serde(rename = "VDVO")]
    VdVo,
    #[serde(rename = "VOAD")]
    VoAd,
    #[serde(rename = "VDAD")]
    VdAd,
    #[serde(rename = "VIVD")]
    ViVd,
    #[serde(rename = "VIVO")]
    ViVo,
    #[serde(rename = "VDVOAD")]
    VdVoAd,
    #[serde(rename = "VDVIVONLY")]
    VdViVOnly,
    #[serde(rename = "VDVIMEVONLY")]
    VdViMeVOnly,
}

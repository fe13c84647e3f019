//! Positional array form of [`StyleRecord`] used in client storage.
//!
//! `[identifier, name, category, payload, source?]`
//!
//! * paint payload: `[[kind, fill, opacity], ...]` where `fill` is a color
//!   string, `""` for image/video, or `[[color, offset], ...]` for gradients
//! * grid/effect payload: enum code
//! * text payload: `"size/lineHeight"`
//! * source: `true` for local records, the library id for stamped remote
//!   records, omitted otherwise
//!
//! Changing this layout invalidates every stored library.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    EffectKind, GradientStop, GridPattern, PaintKind, PaintLayer, StyleCategory, StylePayload,
    StyleRecord, TextMetrics,
};
use crate::ids::{LibraryId, LocalId, RemoteKey, StyleRef};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("unknown style category code {0}")]
    UnknownCategory(u8),
    #[error("unknown paint kind code {0}")]
    UnknownPaintKind(u8),
    #[error("unknown grid pattern code {0}")]
    UnknownGridPattern(u8),
    #[error("unknown effect kind code {0}")]
    UnknownEffectKind(u8),
    #[error("payload does not match {0} category")]
    PayloadMismatch(StyleCategory),
    #[error(transparent)]
    TextMetrics(#[from] super::InvalidTextMetrics),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Code(u8),
    Meta(String),
    Layers(Vec<WireLayer>),
}

#[derive(Debug, Serialize, Deserialize)]
struct WireLayer(u8, WireFill, f64);

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireFill {
    Color(String),
    Stops(Vec<(String, f64)>),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireSource {
    Flag(bool),
    Library(String),
}

impl From<&StylePayload> for WirePayload {
    fn from(payload: &StylePayload) -> Self {
        match payload {
            StylePayload::Paint(layers) => {
                WirePayload::Layers(layers.iter().map(WireLayer::from).collect())
            }
            StylePayload::Grid(pattern) => WirePayload::Code(pattern.code()),
            StylePayload::Effect(kind) => WirePayload::Code(kind.code()),
            StylePayload::Text(metrics) => WirePayload::Meta(metrics.to_string()),
        }
    }
}

impl From<&PaintLayer> for WireLayer {
    fn from(layer: &PaintLayer) -> Self {
        let fill = match layer {
            PaintLayer::Solid { color, .. } | PaintLayer::Variable { color, .. } => {
                WireFill::Color(color.clone())
            }
            PaintLayer::Image { .. } | PaintLayer::Video { .. } => WireFill::Color(String::new()),
            PaintLayer::Gradient { stops, .. } => WireFill::Stops(
                stops
                    .iter()
                    .map(|stop| (stop.color.clone(), stop.offset))
                    .collect(),
            ),
        };
        WireLayer(layer.kind().code(), fill, layer.opacity())
    }
}

impl WirePayload {
    fn into_payload(self, category: StyleCategory) -> Result<StylePayload, WireError> {
        match (category, self) {
            (StyleCategory::Paint, WirePayload::Layers(layers)) => layers
                .into_iter()
                .map(WireLayer::into_layer)
                .collect::<Result<_, _>>()
                .map(StylePayload::Paint),
            (StyleCategory::Grid, WirePayload::Code(code)) => GridPattern::from_code(code)
                .map(StylePayload::Grid)
                .ok_or(WireError::UnknownGridPattern(code)),
            (StyleCategory::Effect, WirePayload::Code(code)) => EffectKind::from_code(code)
                .map(StylePayload::Effect)
                .ok_or(WireError::UnknownEffectKind(code)),
            (StyleCategory::Text, WirePayload::Meta(meta)) => {
                Ok(StylePayload::Text(meta.parse::<TextMetrics>()?))
            }
            (category, _) => Err(WireError::PayloadMismatch(category)),
        }
    }
}

impl WireLayer {
    fn into_layer(self) -> Result<PaintLayer, WireError> {
        let WireLayer(code, fill, opacity) = self;
        let kind = PaintKind::from_code(code).ok_or(WireError::UnknownPaintKind(code))?;
        let mismatch = || WireError::PayloadMismatch(StyleCategory::Paint);
        let layer = match (kind, fill) {
            (PaintKind::Solid, WireFill::Color(color)) => PaintLayer::Solid { color, opacity },
            (PaintKind::Variable, WireFill::Color(color)) => PaintLayer::Variable { color, opacity },
            (PaintKind::Image, _) => PaintLayer::Image { opacity },
            (PaintKind::Video, _) => PaintLayer::Video { opacity },
            (kind, WireFill::Stops(stops)) => PaintLayer::Gradient {
                kind: kind.gradient().ok_or_else(mismatch)?,
                stops: stops
                    .into_iter()
                    .map(|(color, offset)| GradientStop { color, offset })
                    .collect(),
                opacity,
            },
            _ => return Err(mismatch()),
        };
        Ok(layer)
    }
}

impl Serialize for StyleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let source = match (&self.reference, &self.library) {
            (StyleRef::Local(_), _) => Some(WireSource::Flag(true)),
            (StyleRef::Remote(_), Some(library)) => {
                Some(WireSource::Library(library.as_str().to_string()))
            }
            (StyleRef::Remote(_), None) => None,
        };

        let mut seq = serializer.serialize_seq(Some(if source.is_some() { 5 } else { 4 }))?;
        seq.serialize_element(self.reference.as_str())?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.category().code())?;
        seq.serialize_element(&WirePayload::from(&self.payload))?;
        if let Some(source) = source {
            seq.serialize_element(&source)?;
        }
        seq.end()
    }
}

struct StyleRecordVisitor;

impl<'de> Visitor<'de> for StyleRecordVisitor {
    type Value = StyleRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positional style record array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StyleRecord, A::Error> {
        let identifier: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let name: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let code: u8 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let payload: WirePayload = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(3, &self))?;
        let source: Option<WireSource> = seq.next_element::<Option<WireSource>>()?.flatten();

        let category = StyleCategory::from_code(code)
            .ok_or(WireError::UnknownCategory(code))
            .map_err(de::Error::custom)?;
        let payload = payload.into_payload(category).map_err(de::Error::custom)?;

        let (reference, library) = match source {
            Some(WireSource::Flag(true)) => (StyleRef::Local(LocalId::new(identifier)), None),
            Some(WireSource::Library(library)) => (
                StyleRef::Remote(RemoteKey::new(identifier)),
                Some(LibraryId::new(library)),
            ),
            Some(WireSource::Flag(false)) | None => {
                (StyleRef::Remote(RemoteKey::new(identifier)), None)
            }
        };

        Ok(StyleRecord {
            reference,
            name,
            payload,
            library,
        })
    }
}

impl<'de> Deserialize<'de> for StyleRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(StyleRecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::GradientKind;

    #[test]
    fn test_published_paint_record_layout() {
        let record = StyleRecord::new(
            StyleRef::Remote(RemoteKey::new("abc")),
            "Brand/Primary",
            StylePayload::Paint(vec![
                PaintLayer::Solid {
                    color: "rgb(255,0,0)".into(),
                    opacity: 0.5,
                },
                PaintLayer::Image { opacity: 1.0 },
            ]),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"["abc","Brand/Primary",0,[[0,"rgb(255,0,0)",0.5],[1,"",1.0]]]"#
        );
    }

    #[test]
    fn test_source_tag_layout() {
        let local = StyleRecord::new(
            StyleRef::Local(LocalId::new("S:1")),
            "Grid",
            StylePayload::Grid(GridPattern::Columns),
        );
        assert_eq!(serde_json::to_string(&local).unwrap(), r#"["S:1","Grid",1,2,true]"#);

        let remote = StyleRecord::new(
            StyleRef::Remote(RemoteKey::new("k")),
            "Body",
            StylePayload::Text(TextMetrics {
                font_size: 14,
                line_height: None,
            }),
        )
        .stamped(LibraryId::new("Brand"));
        assert_eq!(
            serde_json::to_string(&remote).unwrap(),
            r#"["k","Body",3,"14/Auto","Brand"]"#
        );
    }

    #[test]
    fn test_decode_restores_identifier_space() {
        let local: StyleRecord = serde_json::from_str(r#"["S:1","Fx",2,1,true]"#).unwrap();
        assert_eq!(local.reference, StyleRef::Local(LocalId::new("S:1")));
        assert_eq!(local.payload, StylePayload::Effect(EffectKind::InnerShadow));

        let published: StyleRecord = serde_json::from_str(r#"["k9","Fx",2,3]"#).unwrap();
        assert_eq!(published.reference, StyleRef::Remote(RemoteKey::new("k9")));
        assert_eq!(published.library, None);
    }

    #[test]
    fn test_decode_gradient_layer() {
        let record: StyleRecord = serde_json::from_str(
            r#"["k","Sunset",0,[[6,[["rgb(255,0,0)",0],["rgb(0,0,255,0.5)",1]],0.8]]]"#,
        )
        .unwrap();
        let StylePayload::Paint(layers) = record.payload else {
            panic!("expected paint payload");
        };
        let PaintLayer::Gradient { kind, stops, opacity } = &layers[0] else {
            panic!("expected gradient layer");
        };
        assert_eq!(*kind, GradientKind::Linear);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].color, "rgb(0,0,255,0.5)");
        assert_eq!(*opacity, 0.8);
    }

    #[test]
    fn test_decode_rejects_mismatched_payload() {
        assert!(serde_json::from_str::<StyleRecord>(r#"["k","Fx",2,"12/Auto"]"#).is_err());
        assert!(serde_json::from_str::<StyleRecord>(r#"["k","Fx",9,1]"#).is_err());
        assert!(serde_json::from_str::<StyleRecord>(r#"["k","Fill",0,[[0,[["red",0]],1]]]"#).is_err());
    }
}

//! Video modal state and the embed it shows.
//!
//! Triggers carry `data-video="<youtube id>"`. Opening builds a fresh embed;
//! every close path (close button, overlay click, Escape) tears it down so
//! playback stops.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";
pub const PLAYER_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Attributes of the `<iframe>` player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEmbed {
    pub src: String,
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub allow: &'static str,
    pub lazy: bool,
    pub allow_fullscreen: bool,
}

impl VideoEmbed {
    /// Player for `video_id`; `None` for a blank or malformed id.
    #[must_use]
    pub fn youtube(video_id: &str) -> Option<Self> {
        let id = video_id.trim();
        let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return None;
        }
        Some(Self {
            src: format!("{EMBED_BASE}{id}"),
            title: "Video Player",
            width: 560,
            height: 315,
            allow: PLAYER_ALLOW,
            lazy: true,
            allow_fullscreen: true,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoModal {
    #[default]
    Closed,
    Open { video_id: String },
}

impl VideoModal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Open for `video_id`. Returns the embed to mount, replacing any current one.
    pub fn open(&mut self, video_id: &str) -> Option<VideoEmbed> {
        let embed = VideoEmbed::youtube(video_id);
        match &embed {
            Some(_) => *self = Self::Open { video_id: video_id.trim().to_owned() },
            None => log::warn!("ignoring video trigger with invalid id {video_id:?}"),
        }
        embed
    }

    /// Close if open. Returns `true` when the modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Escape closes an open modal; other keys do nothing.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}

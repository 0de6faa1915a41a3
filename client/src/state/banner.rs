//! Transient message banner shown after signup/unregister.
//!
//! Each `show` bumps a sequence number. The auto-hide timer carries the
//! number it was started with and only hides the banner if no newer message
//! has replaced it since.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    text: String,
    kind: BannerKind,
    visible: bool,
    seq: u64,
}

impl BannerState {
    /// Replace the banner content, make it visible, and return the token the
    /// hide timer must present.
    pub fn show(&mut self, text: impl Into<String>, kind: BannerKind) -> u64 {
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        self.seq += 1;
        self.seq
    }

    /// Hide the banner if `seq` is still the current message.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> BannerKind {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class attribute for the `#message` element.
    pub fn class_attr(&self) -> String {
        if self.visible {
            self.kind.class_name().to_owned()
        } else if self.seq == 0 {
            "hidden".to_owned()
        } else {
            format!("{} hidden", self.kind.class_name())
        }
    }
}

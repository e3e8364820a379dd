use lumen_viz::{icons, Frame, Icon, IconScene, LedPanel};

/// Coarse stream state exposed by the transport at its boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkState {
    /// No stream; the device is waiting for a connection.
    Stopped,
    /// A connected device has paused playback.
    Suspended,
    /// Audio is flowing; the spectrum worker owns the matrix.
    Streaming,
}

/// Icon to show for a link state, if any.
pub fn icon_for(state: LinkState) -> Option<&'static Icon> {
    match state {
        LinkState::Stopped => Some(&icons::PAIRING),
        LinkState::Suspended => Some(&icons::HEART),
        LinkState::Streaming => None,
    }
}

/// One-shot boot-sound decoder, out of scope here; pumped until it finishes.
pub trait OneShotPlayer {
    fn is_running(&self) -> bool;
    fn pump(&mut self);
}

/// Decorative icon display for the phases where no spectrum is rendered.
pub struct IdleDisplay {
    scene: IconScene,
    frame: Frame,
}

impl IdleDisplay {
    pub const fn new() -> Self {
        Self {
            scene: IconScene::new(),
            frame: Frame::new(),
        }
    }

    /// Draw one animation step of `icon` at the pulsing brightness.
    pub fn draw<P: LedPanel>(&mut self, icon: &Icon, panel: &mut P) -> Result<(), P::Error> {
        let level = self.scene.render(icon, &mut self.frame);
        panel.set_brightness(level);
        panel.flush(&self.frame)
    }
}

/// Animate the heart while the boot sound plays.
pub fn boot_animation<P: LedPanel>(
    player: &mut impl OneShotPlayer,
    display: &mut IdleDisplay,
    panel: &mut P,
) -> Result<(), P::Error> {
    while player.is_running() {
        display.draw(&icons::HEART, panel)?;
        player.pump();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingPanel {
        level: u8,
        flushes: u32,
        lit: usize,
    }

    impl LedPanel for RecordingPanel {
        type Error = core::convert::Infallible;

        fn set_brightness(&mut self, level: u8) {
            self.level = level;
        }

        fn flush(&mut self, frame: &Frame) -> Result<(), Self::Error> {
            self.flushes += 1;
            self.lit = frame
                .iter()
                .filter(|&p| p != lumen_viz::RGB8 { r: 0, g: 0, b: 0 })
                .count();
            Ok(())
        }
    }

    struct CountdownPlayer {
        remaining: u32,
    }

    impl OneShotPlayer for CountdownPlayer {
        fn is_running(&self) -> bool {
            self.remaining > 0
        }

        fn pump(&mut self) {
            self.remaining -= 1;
        }
    }

    #[test]
    fn test_boot_animation_draws_until_the_player_finishes() {
        let mut player = CountdownPlayer { remaining: 3 };
        let mut display = IdleDisplay::new();
        let mut panel = RecordingPanel {
            level: 0,
            flushes: 0,
            lit: 0,
        };

        boot_animation(&mut player, &mut display, &mut panel).unwrap();

        assert_eq!(panel.flushes, 3);
        assert!(panel.level <= 60, "pulse brightness, not the spectrum level");
        assert!(panel.lit > 0, "the heart is visible");
    }

    #[test]
    fn test_icon_selection_follows_link_state() {
        assert!(icon_for(LinkState::Stopped).is_some());
        assert!(icon_for(LinkState::Suspended).is_some());
        assert!(icon_for(LinkState::Streaming).is_none());
        assert_ne!(
            icon_for(LinkState::Stopped).unwrap(),
            icon_for(LinkState::Suspended).unwrap()
        );
    }
}

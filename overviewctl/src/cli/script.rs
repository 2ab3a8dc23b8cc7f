//! Line based gesture scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! swipe 2
//! select 1
//! reload
//! clear
//! show
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use log::warn;
use overview_config::GalleryConfig;
use overview_core::{GalleryError, GallerySelectionController, PagerLayout};
use overview_model::CardId;

use super::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Swipe(usize),
    Select(String),
    Reload,
    Clear,
    Show,
}

impl Gesture {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            bail!("too many arguments in '{line}'");
        }

        let gesture = match (verb, arg) {
            ("swipe", Some(page)) => Gesture::Swipe(
                page.parse()
                    .with_context(|| format!("invalid page '{page}'"))?,
            ),
            ("select", Some(id)) => Gesture::Select(id.to_string()),
            ("reload", None) => Gesture::Reload,
            ("clear", None) => Gesture::Clear,
            ("show", None) => Gesture::Show,
            _ => bail!("unrecognized command '{line}'"),
        };
        Ok(Some(gesture))
    }
}

#[derive(Debug)]
pub struct Session<'a> {
    gallery: &'a mut GallerySelectionController,
    config: &'a GalleryConfig,
    layout: PagerLayout,
}

impl<'a> Session<'a> {
    pub fn new(
        gallery: &'a mut GallerySelectionController,
        config: &'a GalleryConfig,
        layout: PagerLayout,
    ) -> Self {
        Self {
            gallery,
            config,
            layout,
        }
    }

    /// Apply every gesture in order. Unknown card selections are reported
    /// and skipped; an out of range swipe stops the run because the script
    /// and the gallery disagree on the card list.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = line.context("failed to read script")?;
            let Some(gesture) = Gesture::parse(&line)
                .with_context(|| format!("line {line_no}"))?
            else {
                continue;
            };
            self.apply(gesture, out)
                .with_context(|| format!("line {line_no}"))?;
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, gesture: Gesture, out: &mut W) -> Result<()> {
        let result = match gesture {
            Gesture::Swipe(page) => self.gallery.on_page_changed(page),
            Gesture::Select(raw) => {
                let id = CardId::new(raw)?;
                self.gallery.select_card(&id)
            }
            Gesture::Reload => {
                let cards = self.config.load_cards()?;
                self.gallery.set_cards(cards)
            }
            Gesture::Clear => self.gallery.set_cards(Vec::new()),
            Gesture::Show => {
                render::write_view(out, &*self.gallery, &self.layout)?;
                return Ok(());
            }
        };

        match result {
            Ok(transition) if transition.is_noop() => {
                writeln!(out, "> no change")?;
            }
            Ok(transition) => render::write_transition(out, &transition)?,
            Err(err @ GalleryError::UnknownCard(_)) => {
                warn!("{err}");
                writeln!(out, "! {err}")?;
            }
            Err(err) => return Err(anyhow!(err)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overview_core::sample::sample_cards;

    fn run(script: &str) -> (Result<()>, String, GallerySelectionController) {
        let config = GalleryConfig::default();
        let mut gallery =
            GallerySelectionController::new(sample_cards()).unwrap();
        let mut out = Vec::new();
        let result = Session::new(&mut gallery, &config, PagerLayout::default())
            .run(script.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap(), gallery)
    }

    #[test]
    fn parse_skips_comments_and_rejects_junk() {
        assert_eq!(Gesture::parse("  # note").unwrap(), None);
        assert_eq!(Gesture::parse("").unwrap(), None);
        assert_eq!(Gesture::parse("swipe 2").unwrap(), Some(Gesture::Swipe(2)));
        assert!(Gesture::parse("swipe two").is_err());
        assert!(Gesture::parse("swipe").is_err());
        assert!(Gesture::parse("reload now").is_err());
        assert!(Gesture::parse("jump 1").is_err());
    }

    #[test]
    fn swipe_then_select_reports_events() {
        let (result, out, gallery) = run("swipe 2\nselect 1\nselect 1\n");
        result.unwrap();
        assert!(out.contains("> selected 3 (page 2)"), "{out}");
        assert!(out.contains("> scroll -> page 0"), "{out}");
        assert!(out.contains("> no change"), "{out}");
        assert_eq!(gallery.current_page(), Some(0));
    }

    #[test]
    fn unknown_card_is_reported_and_skipped() {
        let (result, out, gallery) = run("select nope\nswipe 1\n");
        result.unwrap();
        assert!(out.contains("! card 'nope' is not part of the gallery"));
        assert_eq!(gallery.current_page(), Some(1));
    }

    #[test]
    fn out_of_range_swipe_aborts() {
        let (result, _out, gallery) = run("swipe 1\nswipe 7\nswipe 2\n");
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
        assert_eq!(gallery.current_page(), Some(1));
    }

    #[test]
    fn clear_then_reload_restores_sample() {
        let (result, out, gallery) = run("clear\nshow\nreload\n");
        result.unwrap();
        assert!(out.contains("selection cleared"), "{out}");
        assert!(out.contains("No cards available"), "{out}");
        assert!(out.contains("cards replaced (3)"), "{out}");
        assert_eq!(gallery.selected_card_id().unwrap().as_str(), "1");
    }
}

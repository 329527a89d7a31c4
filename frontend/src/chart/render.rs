use tracing::debug;

use super::key::SliceKey;
use super::layout::GridLayout;
use super::months::{month_display, ordered_months};
use super::pie::{pie, Arc};
use super::scale::OrdinalScale;
use super::{format_number, MonthlyData};
use crate::colors::Palette;
use crate::config::ChartConfig;

/// A titled pie placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBlock {
    pub month: String,
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub title_offset: f64,
}

/// One sector of a block plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub key: SliceKey,
    pub path: String,
    pub fill: Option<&'static str>,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Rendering target for the monthly charts.
pub trait ChartSurface {
    fn set_canvas_size(&mut self, width: f64, height: f64);

    /// Add a block and return a handle for its slices.
    fn create_block(&mut self, block: ChartBlock) -> usize;

    fn set_slice(&mut self, block: usize, slice: Slice);

    /// Show or hide every label carrying `key`, across all blocks.
    fn set_label_visibility(&mut self, key: &SliceKey, visible: bool);
}

/// Lays out one pie per month and paints it onto a [`ChartSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDebitRenderer {
    layout: GridLayout,
    palette: Palette,
    palette_offset: usize,
}

impl MonthlyDebitRenderer {
    pub fn new(config: &ChartConfig, palette: Palette) -> Self {
        Self {
            layout: GridLayout::from(config),
            palette,
            palette_offset: config.palette_offset,
        }
    }

    /// Draw every month; returns the number of blocks created.
    pub fn render<S: ChartSurface>(&self, data: &MonthlyData, surface: &mut S) -> usize {
        let months = ordered_months(data);
        surface.set_canvas_size(self.layout.width, self.layout.canvas_height(months.len()));

        let arc = Arc {
            inner_radius: 0.0,
            outer_radius: self.layout.outer_radius(),
        };
        let positions = self.layout.positions(months.len());

        for (month, position) in months.iter().zip(positions) {
            let records = &data[*month];
            let range = self.palette.window(self.palette_offset, records.len());
            let mut color = OrdinalScale::from_label_extent(
                range,
                records.iter().map(|r| r.label.as_str()),
            );

            let block = surface.create_block(ChartBlock {
                month: month.to_string(),
                title: month_display(month),
                x: position.x,
                y: position.y,
                title_offset: self.layout.title_offset(),
            });

            let values: Vec<f64> = records.iter().map(|r| r.balance.value).collect();
            for (record, slice) in records.iter().zip(pie(&values)) {
                let key = SliceKey::from_label(&record.label);
                let (label_x, label_y) = arc.centroid(&slice);
                surface.set_slice(
                    block,
                    Slice {
                        key: key.clone(),
                        path: arc.path(&slice),
                        fill: color.color(&format_number(slice.value)),
                        label: format!("{} ({})", record.label, record.balance.text),
                        label_x,
                        label_y,
                    },
                );
                surface.set_label_visibility(&key, false);
            }
            debug!(month, slices = records.len(), "rendered monthly debit chart");
        }
        months.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::chart::parse_monthly_data;

    /// Surface that keeps everything it is told.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        size: Option<(f64, f64)>,
        blocks: Vec<(ChartBlock, Vec<Slice>)>,
        visible: HashMap<SliceKey, bool>,
    }

    impl ChartSurface for RecordingSurface {
        fn set_canvas_size(&mut self, width: f64, height: f64) {
            self.size = Some((width, height));
        }

        fn create_block(&mut self, block: ChartBlock) -> usize {
            self.blocks.push((block, Vec::new()));
            self.blocks.len() - 1
        }

        fn set_slice(&mut self, block: usize, slice: Slice) {
            self.blocks[block].1.push(slice);
        }

        fn set_label_visibility(&mut self, key: &SliceKey, visible: bool) {
            self.visible.insert(key.clone(), visible);
        }
    }

    fn render(raw: &str) -> RecordingSurface {
        let data = parse_monthly_data(raw).unwrap();
        let renderer = MonthlyDebitRenderer::new(&ChartConfig::default(), Palette::default());
        let mut surface = RecordingSurface::default();
        renderer.render(&data, &mut surface);
        surface
    }

    #[test]
    fn single_month_block() {
        let surface = render(
            r#"{"1": [{"label": "Rent", "balance": 1200}, {"label": "Food", "balance": 300}]}"#,
        );
        assert_eq!(surface.size, Some((1200.0, 800.0)));
        assert_eq!(surface.blocks.len(), 1);

        let (block, slices) = &surface.blocks[0];
        assert_eq!(block.title, "Janurary");
        assert_eq!((block.x, block.y), (200.0, 200.0));
        assert_eq!(block.title_offset, -180.0);

        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Rent (1200)", "Food (300)"]);
        assert_eq!(slices[0].key.as_str(), "UmVudA");
        assert_eq!(slices[0].fill, Some("#4c4646"));
        assert_eq!(slices[1].fill, Some("#504a4b"));

        // 1200:300 puts the first sector past the half circle
        assert!(slices[0].path.contains(" 0 1,1 "));
        assert!(slices[1].path.contains(" 0 0,1 "));
        assert!(surface.visible.values().all(|v| !v));
    }

    #[test]
    fn months_follow_numeric_order_and_grid() {
        let surface = render(
            r#"{"10": [{"label": "A", "balance": 1}], "2": [{"label": "B", "balance": 1}],
                "1": [{"label": "C", "balance": 1}], "4": [{"label": "D", "balance": 1}],
                "3": [{"label": "E", "balance": 1}]}"#,
        );
        let titles: Vec<&str> = surface.blocks.iter().map(|(b, _)| b.title.as_str()).collect();
        assert_eq!(titles, ["Janurary", "February", "March", "April", "October"]);
        assert_eq!(surface.size, Some((1200.0, 1200.0)));
        let (fourth, _) = &surface.blocks[3];
        assert_eq!((fourth.x, fourth.y), (200.0, 600.0));
    }

    #[test]
    fn equal_balances_share_a_color() {
        let surface = render(
            r#"{"5": [{"label": "A", "balance": 10}, {"label": "B", "balance": 10},
                      {"label": "C", "balance": 20}]}"#,
        );
        let fills: Vec<_> = surface.blocks[0].1.iter().map(|s| s.fill).collect();
        assert_eq!(fills[0], fills[1]);
        assert_ne!(fills[0], fills[2]);
    }

    #[test]
    fn decimal_string_balances_keep_their_text() {
        let surface = render(
            r#"{"1": [{"label": "Rent", "balance": "1200.00"}, {"label": "Gas", "balance": 1200}]}"#,
        );
        let slices = &surface.blocks[0].1;
        assert_eq!(slices[0].label, "Rent (1200.00)");
        assert_eq!(slices[1].label, "Gas (1200)");
        // the color key is numeric, so both read the same
        assert_eq!(slices[0].fill, slices[1].fill);
        assert_eq!(slices[0].path, "M0,-150A150,150 0 0,1 0,150L0,0Z");
    }

    #[test]
    fn visibility_toggles_every_label_with_the_key() {
        let mut surface = render(
            r#"{"1": [{"label": "Rent", "balance": 1}], "2": [{"label": "Rent", "balance": 2}]}"#,
        );
        let key = SliceKey::from_label("Rent");
        surface.set_label_visibility(&key, true);
        assert_eq!(surface.visible.get(&key), Some(&true));
        surface.set_label_visibility(&key, false);
        assert_eq!(surface.visible.get(&key), Some(&false));
    }
}

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::key::SliceKey;
use super::render::{ChartBlock, ChartSurface, MonthlyDebitRenderer, Slice};
use super::{format_number, MonthlyData};
use crate::api::fetch_monthly_debits;
use crate::colors::Palette;
use crate::config::ChartConfig;
use crate::dom;

/// Collects the rendered charts and turns them into an SVG tree.
#[derive(Debug, Default)]
pub struct SvgChartSurface {
    width: f64,
    height: f64,
    blocks: Vec<(ChartBlock, Vec<Slice>)>,
    visible: HashSet<SliceKey>,
}

impl ChartSurface for SvgChartSurface {
    fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn create_block(&mut self, block: ChartBlock) -> usize {
        self.blocks.push((block, Vec::new()));
        self.blocks.len() - 1
    }

    fn set_slice(&mut self, block: usize, slice: Slice) {
        if let Some((_, slices)) = self.blocks.get_mut(block) {
            slices.push(slice);
        }
    }

    fn set_label_visibility(&mut self, key: &SliceKey, visible: bool) {
        if visible {
            self.visible.insert(key.clone());
        } else {
            self.visible.remove(key);
        }
    }
}

impl SvgChartSurface {
    pub fn is_label_visible(&self, key: &SliceKey) -> bool {
        self.visible.contains(key)
    }

    /// Labels under the pointer show on top of the drawn visibility.
    pub fn shows_label(&self, key: &SliceKey, hovered: Option<&SliceKey>) -> bool {
        hovered == Some(key) || self.is_label_visible(key)
    }

    /// `on_hover` receives the slice key and whether the pointer entered it.
    pub fn to_html(&self, hovered: Option<&SliceKey>, on_hover: Callback<(SliceKey, bool)>) -> Html {
        html! {
            <svg width={format_number(self.width)} height={format_number(self.height)}>
                { for self.blocks.iter().map(|(block, slices)| self.block_html(block, slices, hovered, &on_hover)) }
            </svg>
        }
    }

    fn block_html(
        &self,
        block: &ChartBlock,
        slices: &[Slice],
        hovered: Option<&SliceKey>,
        on_hover: &Callback<(SliceKey, bool)>,
    ) -> Html {
        let translate = format!("translate({},{})", format_number(block.x), format_number(block.y));
        let title_translate = format!("translate(0, {})", format_number(block.title_offset));

        html! {
            <g transform={translate} data-month={block.month.clone()}>
                <text transform={title_translate} dy="1em" style="text-anchor: middle;">{ block.title.clone() }</text>
                { for slices.iter().map(|slice| {
                    let onmouseover = {
                        let on_hover = on_hover.clone();
                        let key = slice.key.clone();
                        Callback::from(move |_: MouseEvent| on_hover.emit((key.clone(), true)))
                    };
                    let onmouseout = {
                        let on_hover = on_hover.clone();
                        let key = slice.key.clone();
                        Callback::from(move |_: MouseEvent| on_hover.emit((key.clone(), false)))
                    };
                    let fill = format!("fill: {};", slice.fill.unwrap_or("none"));
                    html! {
                        <g class="arc">
                            <path d={slice.path.clone()} style={fill} onmouseover={onmouseover} onmouseout={onmouseout} />
                        </g>
                    }
                }) }
                { for slices.iter().map(|slice| {
                    let style = if self.shows_label(&slice.key, hovered) {
                        "text-anchor: middle;"
                    } else {
                        "text-anchor: middle; display: none;"
                    };
                    let translate = format!(
                        "translate({},{})",
                        format_number(slice.label_x),
                        format_number(slice.label_y)
                    );
                    html! {
                        <text class={slice.key.to_string()} transform={translate} dy=".35em" style={style}>
                            { slice.label.clone() }
                        </text>
                    }
                }) }
            </g>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthlyDebitChartsProps {
    pub data: Rc<MonthlyData>,
    pub config: ChartConfig,
    #[prop_or_default]
    pub palette: Palette,
}

#[function_component(MonthlyDebitCharts)]
pub fn monthly_debit_charts(props: &MonthlyDebitChartsProps) -> Html {
    let hovered = use_state(|| None::<SliceKey>);

    // hover changes only restyle labels; the arcs are drawn once per data set
    let surface = use_memo(
        |(data, config, palette)| {
            let mut surface = SvgChartSurface::default();
            MonthlyDebitRenderer::new(config, *palette).render(data, &mut surface);
            surface
        },
        (props.data.clone(), props.config.clone(), props.palette),
    );

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |(key, entered): (SliceKey, bool)| {
            if entered {
                hovered.set(Some(key));
            } else if (*hovered).as_ref() == Some(&key) {
                hovered.set(None);
            }
        })
    };

    surface.to_html((*hovered).as_ref(), on_hover)
}

#[derive(Properties, PartialEq, Clone)]
pub struct MonthlyDebitsPanelProps {
    pub url: String,
    pub config: ChartConfig,
}

/// Fetches the yearly debit data, then swaps the page loader for the charts.
#[function_component(MonthlyDebitsPanel)]
pub fn monthly_debits_panel(props: &MonthlyDebitsPanelProps) -> Html {
    let data = use_state(|| None::<Rc<MonthlyData>>);
    let load_error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let load_error = load_error.clone();
        let loader_id = props.config.loader_id.clone();
        use_effect_with_deps(
            move |url: &String| {
                let url = url.clone();
                spawn_local(async move {
                    match fetch_monthly_debits(&url).await {
                        Ok(months) => {
                            info!(months = months.len(), "loaded yearly debit data");
                            data.set(Some(Rc::new(months)));
                        }
                        Err(err) => {
                            error!(url = %url, error = %err, "failed to load yearly debit data");
                            load_error.set(Some("Could not load the monthly debits.".to_string()));
                        }
                    }
                    if let Err(err) = dom::hide_by_id(&loader_id) {
                        warn!(error = %err, "could not hide chart loader");
                    }
                });
                || ()
            },
            props.url.clone(),
        );
    }

    match (&*data, &*load_error) {
        (Some(months), _) => html! {
            <MonthlyDebitCharts data={months.clone()} config={props.config.clone()} />
        },
        (None, Some(msg)) => html! { <p class="text-danger">{ msg.clone() }</p> },
        (None, None) => html! {},
    }
}

//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! The Chart.js glue lives in `assets/js/bar-chart.js`, is embedded at compile
//! time and evaluated at global scope once Chart.js has loaded. Chart.js itself
//! is loaded by the host page.

use cfm_widgets::chart::BarChartConfig;
use chrono::NaiveDate;

// Embed the chart glue at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CFM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal. JSON strings are valid JS literals.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart glue with a wait-for-Chart.js polling loop.
///
/// `renderBarChart` is a `function` declaration; evaluating it with indirect
/// eval keeps it at global scope rather than inside the `setInterval` callback,
/// and it is then promoted to `window.*` explicitly. Call once at app startup.
pub fn init_charts() {
    let store_js = format!("window.__cfmChartScripts = {};", js_string(BAR_CHART_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__cfmChartScripts);
                    delete window.__cfmChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__cfmChartsReady = true;
                    console.log('CFM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render `config` as a bar chart on the canvas with id `canvas_id`.
///
/// Polls until Chart.js is ready and the canvas exists, so it is safe to call
/// from an effect right after the first render.
pub fn render_bar_chart(canvas_id: &str, config: &BarChartConfig) {
    let id = js_string(canvas_id);
    let config_json = js_string(&config.to_json());
    log::info!(
        "js_bridge: rendering bar chart '{}' with {} bars",
        canvas_id,
        config.data.labels.len()
    );
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cfmChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart({id}, {config_json});
                    }} catch(e) {{ console.error('[CFM] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Scroll the element with id `element_id` to its bottom edge.
pub fn scroll_to_bottom(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    match element {
        Some(el) => el.set_scroll_top(el.scroll_height()),
        None => log::warn!("js_bridge: no element '{}' to scroll", element_id),
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

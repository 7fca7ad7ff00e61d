//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js heatmap renderer lives in `assets/js/*.js` and is loaded at
//! runtime. The scripts are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module serializes draw plans and calls those globals.

// Embed the renderer JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Heatmap JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the renderer scripts once D3 has loaded.
///
/// The scripts are stashed on `window` and evaluated at global scope by a
/// polling callback, so their `function` declarations become globals; each
/// entry point is then promoted to `window.*` explicitly. Safe to call more
/// than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, HEATMAP_JS].join("\n");
    let store_js = format!(
        "if (!window.__rainChartsReady) {{ window.__rainChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__rainChartsReady || window.__rainChartsPolling) { return; }
            window.__rainChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__rainChartScripts);
                    delete window.__rainChartScripts;
                    if (typeof renderHeatmap !== 'undefined') window.renderHeatmap = renderHeatmap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__rainChartsReady = true;
                    window.__rainChartsPolling = false;
                    console.log('Rainfall heatmap initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a heatmap draw plan into the element with `container_id`.
///
/// Polls until D3 is loaded, the renderer is initialized and the container
/// exists in the DOM.
pub fn render_heatmap(container_id: &str, plan_json: &str) {
    let id = js_string(container_id);
    let plan = js_string(plan_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__rainChartsReady &&
                    typeof window.renderHeatmap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderHeatmap({id}, {plan});
                    }} catch(e) {{ console.error('renderHeatmap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear the heatmap in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

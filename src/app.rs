use leptos::*;

use crate::{
    application::{CalculatorAction, CalculatorState, Transition},
    config::AppConfig,
    debug_log::DebugLog,
    domain::{
        calculator::HistoryEntry,
        logging::{LogLevel, LogRecord, LogScope, LogSink},
    },
    infrastructure::services::{BrowserClock, ConsoleLogger},
    log_info,
};

thread_local! {
    static DEBUG_LOG: RwSignal<DebugLog> = create_rw_signal(DebugLog::default());
}

/// Sink that writes to the devtools console and mirrors each line into the
/// on-page debug console.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger) -> Self {
        Self { console }
    }
}

impl LogSink for LeptosLogger {
    fn accepts(&self, level: LogLevel) -> bool {
        self.console.accepts(level)
    }

    fn write(&self, record: &LogRecord) {
        let line = self.console.render(record);
        self.console.write_line(record.level, &line);
        DEBUG_LOG.with(|log| log.update(|log| {
            log.push(line);
        }));
    }
}

/// RDA calculator page: form on the left, history on the right.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = create_rw_signal(CalculatorState::new());
    let clock = BrowserClock::new();

    let dispatch = Callback::new(move |action: CalculatorAction| {
        let transition = state.with_untracked(|current| current.apply(action, &clock));
        if let Transition::Updated(next) = transition {
            state.set(next);
        }
    });

    view! {
        <style>{STYLES}</style>
        <div class="main-container">
            <h1 class="neon-text page-title">"RDA Calculator"</h1>
            <div class="layout">
                <CalculatorPanel state=state dispatch=dispatch />
                <HistoryPanel state=state dispatch=dispatch />
            </div>
            <Show when=move || config.debug_console>
                <DebugConsole />
            </Show>
        </div>
    }
}

#[component]
fn CalculatorPanel(state: RwSignal<CalculatorState>, dispatch: Callback<CalculatorAction>) -> impl IntoView {
    let result_text = move || state.with(|s| s.result.to_string());
    let result_is_error = move || state.with(|s| s.result.is_error());

    view! {
        <div class="calculator-section">
            <div class="input-group">
                <label class="input-label">"Product Name"</label>
                <input
                    id="product-name"
                    type="text"
                    class="input-box"
                    prop:value=move || state.with(|s| s.form.product_name.clone())
                    on:input=move |ev| dispatch.call(CalculatorAction::EditProductName(event_target_value(&ev)))
                />
            </div>

            <div class="fraction">
                <div>
                    <label class="input-label">"Nutritional Value (per 100g/100ml)"</label>
                    <input
                        id="numerator"
                        type="text"
                        inputmode="decimal"
                        class="input-box"
                        prop:value=move || state.with(|s| s.form.numerator.clone())
                        on:input=move |ev| dispatch.call(CalculatorAction::EditNumerator(event_target_value(&ev)))
                    />
                </div>
                <div class="fraction-line"></div>
                <div>
                    <label class="input-label">"Fixed Daily Requirement"</label>
                    <input
                        id="denominator"
                        type="text"
                        inputmode="decimal"
                        class="input-box"
                        prop:value=move || state.with(|s| s.form.denominator.clone())
                        on:input=move |ev| dispatch.call(CalculatorAction::EditDenominator(event_target_value(&ev)))
                    />
                </div>
                <div class="neon-text times-hundred">" × 100 ="</div>
            </div>

            <div id="result" class="result-display neon-text" class:error=result_is_error>
                {result_text}
            </div>

            <div class="button-row">
                <button class="neon-button" on:click=move |_| dispatch.call(CalculatorAction::Calculate)>
                    "Calculate"
                </button>
                <button class="neon-button" on:click=move |_| dispatch.call(CalculatorAction::ClearCalculator)>
                    "Clear Calculator"
                </button>
            </div>
        </div>
    }
}

#[component]
fn HistoryPanel(state: RwSignal<CalculatorState>, dispatch: Callback<CalculatorAction>) -> impl IntoView {
    view! {
        <div class="history-section">
            <h4 class="neon-text history-title">"History"</h4>
            <div id="history-list">
                <For
                    each=move || state.with(|s| s.history.to_vec())
                    key=|entry| entry.id
                    children=move |entry| view! { <HistoryItem entry=entry /> }
                />
            </div>
            <button class="neon-button full-width" on:click=move |_| dispatch.call(CalculatorAction::ClearHistory)>
                "Clear History"
            </button>
        </div>
    }
}

#[component]
fn HistoryItem(entry: HistoryEntry) -> impl IntoView {
    view! {
        <div class="history-item">
            <strong>{format!("{}: ", entry.product_name)}</strong>
            <span>{entry.calculation_text()}</span>
            <div class="history-time">{entry.time_label()}</div>
        </div>
    }
}

#[component]
fn DebugConsole() -> impl IntoView {
    let log = DEBUG_LOG.with(|log| *log);
    let is_paused = move || log.with(|log| log.is_paused());

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"Debug Console"</span>
                <div>
                    <button
                        class="debug-btn"
                        on:click=move |_| {
                            let mut paused = false;
                            log.update(|log| paused = log.toggle_pause());
                            if !paused {
                                log_info!(LogScope::DebugConsole, "Logging resumed");
                            }
                        }
                    >
                        {move || if is_paused() { "Resume" } else { "Pause" }}
                    </button>
                    <button class="debug-btn" on:click=move |_| log.update(|log| log.clear())>
                        "Clear"
                    </button>
                </div>
            </div>
            <div class="debug-log">
                <For
                    each=move || log.with(|log| log.lines())
                    key=|line| line.seq
                    children=move |line| view! { <div class="log-line">{line.text}</div> }
                />
            </div>
        </div>
    }
}

const STYLES: &str = r#"
body {
    background: linear-gradient(135deg, #000000 0%, #1a1a1a 100%);
    color: #fff;
    font-family: 'Inter', sans-serif;
    min-height: 100vh;
    margin: 0;
}

.main-container {
    background: rgba(0, 0, 0, 0.7);
    border: 2px solid #ff0000;
    border-radius: 15px;
    box-shadow: 0 0 20px rgba(255, 0, 0, 0.3);
    padding: 20px;
    margin: 10px;
}

.page-title {
    text-align: center;
    margin: 8px 0 16px;
}

.layout {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 20px;
}

.neon-text {
    color: #fff;
    text-shadow: 0 0 5px #fff, 0 0 10px #ff0000, 0 0 20px #ff0000;
    letter-spacing: 1px;
}

.neon-button {
    background: linear-gradient(45deg, #ff0000, #ff4d4d);
    color: #fff;
    border: none;
    padding: 8px 20px;
    margin: 0 8px;
    border-radius: 8px;
    transition: all 0.3s ease;
    text-transform: uppercase;
    font-weight: bold;
    box-shadow: 0 0 15px rgba(255, 0, 0, 0.5);
    letter-spacing: 1px;
    cursor: pointer;
}

.neon-button:hover {
    box-shadow: 0 0 25px rgba(255, 0, 0, 0.8);
    transform: scale(1.05);
}

.full-width {
    width: 100%;
    margin: 15px 0 0;
}

.input-group { margin-bottom: 15px; }

.input-label {
    display: block;
    color: #00ff00;
    font-size: 14px;
    margin-bottom: 5px;
    text-transform: uppercase;
    letter-spacing: 1px;
}

.input-box {
    background: rgba(26, 26, 26, 0.9);
    border: 2px solid #ff0000;
    color: #fff;
    padding: 8px;
    border-radius: 8px;
    width: 100%;
    box-sizing: border-box;
}

.input-box:focus {
    border-color: #00ff00;
    box-shadow: 0 0 15px rgba(0, 255, 0, 0.3);
    outline: none;
}

.fraction {
    font-size: 24px;
    text-align: center;
    margin: 10px 0;
    background: rgba(0, 0, 0, 0.3);
    padding: 15px;
    border-radius: 15px;
}

.fraction-line {
    height: 3px;
    background: linear-gradient(90deg, #ff0000, #00ff00);
    margin: 10px 0;
    border-radius: 2px;
}

.result-display {
    font-size: 28px;
    text-align: center;
    min-height: 1.4em;
    margin: 10px 0;
    padding: 10px;
    background: rgba(0, 0, 0, 0.5);
    border-radius: 10px;
}

.result-display.error {
    font-size: 18px;
    color: #ff8080;
}

.button-row {
    display: flex;
    align-items: center;
    margin-bottom: 15px;
}

.history-section {
    background: rgba(0, 0, 0, 0.5);
    border-radius: 15px;
    padding: 15px;
}

.history-title {
    border-bottom: 2px solid #ff0000;
    padding-bottom: 10px;
    margin: 0 0 15px;
}

#history-list {
    max-height: calc(100vh - 250px);
    overflow-y: auto;
}

.history-item {
    background: linear-gradient(90deg, #1a1a1a, #2a2a2a);
    border-left: 4px solid #ff0000;
    margin: 5px 0;
    padding: 10px;
    border-radius: 0 8px 8px 0;
}

.history-time {
    font-size: 0.8em;
    color: #888;
}

.debug-console {
    background: rgba(0, 0, 0, 0.8);
    border-radius: 10px;
    padding: 15px;
    margin-top: 20px;
    max-height: 300px;
    overflow-y: auto;
    border: 1px solid #4a5d73;
}

.debug-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 10px;
    color: #72c685;
    font-weight: bold;
}

.debug-btn {
    background: #4a5d73;
    color: white;
    border: none;
    padding: 5px 10px;
    border-radius: 5px;
    cursor: pointer;
    font-size: 12px;
    margin-left: 5px;
}

.debug-log {
    font-family: 'Courier New', monospace;
    font-size: 11px;
    line-height: 1.3;
}

.log-line {
    color: #e0e0e0;
    margin: 2px 0;
    padding: 1px 5px;
}
"#;

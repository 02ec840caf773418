use crate::domain::config::UiConfig;
use crate::domain::errors::{DomError, FormatError};
use crate::domain::formatting::{CurrencyFormattingService, DateFormattingService, Money};
use crate::infrastructure::dom::alerts::AlertAutoDismiss;
use crate::infrastructure::dom::forms::FormValidator;
use crate::infrastructure::dom::scroll::SmoothScroller;

/// Wires configuration into the concrete services and exposes one method
/// per page behavior. The presentation layer holds a single instance and
/// swaps it out when `configure()` replaces the settings.
pub struct PageBehaviorCoordinator {
    config: UiConfig,
    currency: CurrencyFormattingService,
    dates: DateFormattingService,
    alerts: AlertAutoDismiss,
    forms: FormValidator,
    scroller: SmoothScroller,
}

impl Default for PageBehaviorCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBehaviorCoordinator {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            currency: CurrencyFormattingService::new(),
            dates: DateFormattingService::new(),
            alerts: AlertAutoDismiss::from_config(&config),
            forms: FormValidator::from_config(&config),
            scroller: SmoothScroller::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn format_currency(&self, amount: f64) -> String {
        self.currency.format(Money::new(amount))
    }

    pub fn format_date(&self, raw: &str) -> Result<String, FormatError> {
        self.dates.reformat(raw)
    }

    pub fn schedule_alert_dismissals(&self) -> Result<usize, DomError> {
        self.alerts.schedule_all()
    }

    pub fn attach_form_validation(&self, form_id: &str) -> Result<(), DomError> {
        self.forms.bind(form_id)
    }

    pub fn scroll_to(&self, selector: &str) -> Result<(), DomError> {
        self.scroller.scroll_to(selector)
    }
}

use tera::{Context, Tera};

use crate::errors::AppError;
use crate::models::{BookingNotification, OutboundEmail};

const TEMPLATE_NAME: &str = "booking_notification.html";
const BRAND: &str = "QuickServe";
const CITY: &str = "Coimbatore";

/// Prefixed to the raw phone number to build the WhatsApp deep link.
pub const WHATSAPP_COUNTRY_CODE: &str = "91";

pub fn subject_line(service: &str) -> String {
    format!("🔔 New Booking Request - {service}")
}

/// Renders booking notifications. The template is compiled into the binary
/// and registered with an `.html` name so tera escapes every interpolated value.
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(
                TEMPLATE_NAME,
                include_str!("../../templates/booking_notification.html"),
            )
            .map_err(|e| AppError::Template(e.to_string()))?;

        Ok(Self { engine })
    }

    pub fn render_html(&self, notification: &BookingNotification) -> Result<String, AppError> {
        let mut context = Context::new();
        context.insert("brand", BRAND);
        context.insert("city", CITY);
        context.insert("customer_name", &notification.customer_name);
        context.insert("phone_number", &notification.phone_number);
        context.insert(
            "whatsapp_number",
            &format!("{WHATSAPP_COUNTRY_CODE}{}", notification.phone_number),
        );
        context.insert("location", &notification.location);
        context.insert("service", &notification.service);
        context.insert("problem_description", &notification.problem_description);
        context.insert("preferred_date", &notification.preferred_date);
        context.insert(
            "time_label",
            notification
                .preferred_time
                .map(|slot| slot.label())
                .unwrap_or(""),
        );

        self.engine
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| AppError::Template(e.to_string()))
    }

    /// Builds the full provider payload: one recipient, subject keyed on the service.
    pub fn render(
        &self,
        notification: &BookingNotification,
        from: &str,
    ) -> Result<OutboundEmail, AppError> {
        Ok(OutboundEmail {
            from: from.to_string(),
            to: vec![notification.admin_email.clone()],
            subject: subject_line(&notification.service),
            html: self.render_html(notification)?,
        })
    }
}

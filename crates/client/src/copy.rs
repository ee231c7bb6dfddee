//! User-facing text of the contact modal (pt-BR).

use crate::SubmissionStatus;

pub const TITLE: &str = "Entre em Contato";
pub const ERROR_NOTICE: &str =
    "Erro ao enviar mensagem. Por favor, tente novamente ou use o e-mail direto.";
pub const SUCCESS_TITLE: &str = "Mensagem Enviada!";
pub const SUCCESS_BODY: &str = "Obrigado pelo contato. Responderei em breve.";
pub const SEND_LABEL: &str = "Enviar Mensagem";
pub const SENDING_LABEL: &str = "Enviando...";
pub const CANCEL_LABEL: &str = "Cancelar";

pub fn submit_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Sending => SENDING_LABEL,
        _ => SEND_LABEL,
    }
}

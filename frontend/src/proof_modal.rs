use log::error;
use yew::prelude::*;
use shared::catalog::SCHOOL_LOGO_PATH;
use shared::proof::{ProofSheet, SignatureBlock};
use shared::{export_file_name, RegistrationRecord};
use crate::{config::CONFIG, export::download_proof, styles::*};

#[derive(Properties, PartialEq)]
pub struct RegistrationProofModalProps {
    pub record: RegistrationRecord,
    pub on_close: Callback<()>,
}

fn render_signature(block: &SignatureBlock, align: &'static str) -> Html {
    html! {
        <div class={align}>
            {for block.caption.iter().map(|line| html! { <p>{line}</p> })}
            <div class="h-20"></div>
            <p class="font-semibold border-t pt-1">{&block.signer}</p>
        </div>
    }
}

#[function_component]
pub fn RegistrationProofModal(props: &RegistrationProofModalProps) -> Html {
    let sheet = ProofSheet::from_record(&props.record);
    let export_error = use_state(|| None::<String>);

    let on_download = {
        let sheet = sheet.clone();
        let file_name = export_file_name(&props.record.full_name);
        let export_error = export_error.clone();
        Callback::from(move |_: MouseEvent| {
            match download_proof(&sheet, &file_name, CONFIG.export_scale) {
                Ok(()) => export_error.set(None),
                Err(err) => {
                    error!("proof export failed: {}", err);
                    export_error.set(Some("Gagal membuat PDF, silakan coba lagi.".to_string()));
                }
            }
        })
    };

    html! {
        <div class={MODAL_BACKDROP}>
            <div class="bg-white text-slate-800 rounded-lg shadow-2xl w-full max-w-2xl max-h-[90vh] overflow-y-auto">
                <div class="p-8 bg-white printable-area">
                    <header class="text-center mb-6">
                        <img src={SCHOOL_LOGO_PATH} alt="School Logo" class="w-20 h-20 mx-auto mb-2" />
                        <h2 class="text-xl font-bold text-gray-800">{sheet.school_name}</h2>
                        <h3 class="text-lg font-semibold text-gray-700">{sheet.title}</h3>
                    </header>

                    <div class="my-6 border-t-2 border-b-2 border-gray-800 py-2">
                        <h4 class="text-md font-bold text-center text-gray-800">{sheet.heading}</h4>
                    </div>

                    <table class="w-full text-left text-sm mb-8">
                        <tbody>
                            {for sheet.rows.iter().map(|row| html! {
                                <tr class="border-b">
                                    <td class="py-2 px-4 w-1/3 font-medium text-slate-600">{row.label}</td>
                                    <td class="py-2 px-4 font-semibold text-slate-800">{&row.value}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>

                    <footer class="flex justify-between items-start pt-8 text-center text-sm">
                        {render_signature(&sheet.student, "")}
                        {render_signature(&sheet.guardian, "text-right")}
                    </footer>
                </div>

                {if let Some(message) = &*export_error {
                    html! { <div class={combine_classes(&alert_style("error"), "mx-4 mb-2")}>{message}</div> }
                } else { html! {} }}

                <div class="bg-gray-100 p-4 flex justify-end space-x-3 rounded-b-lg">
                    <button type="button" onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class={combine_classes(BUTTON_BASE, BUTTON_MUTED)}>
                        {"Tutup"}
                    </button>
                    <button type="button" onclick={on_download} class={button_primary(false)}>
                        {"Unduh PDF"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use anyhow::{anyhow, Context, Result};
use gloo_timers::future::TimeoutFuture;
use gloo_utils::errors::JsError;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub async fn focus_element(id: &str) -> Result<HtmlElement> {
    let elt = get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow!("Unable to convert Element {id} into HtmlElement"))?;

    TimeoutFuture::new(100).await;

    elt.focus().map_err(|err| JsError::try_from(err).unwrap())?;

    Ok(elt)
}

fn get_element_by_id(id: &str) -> Result<Element> {
    let window = web_sys::window().context("Unable to load `window`")?;
    let document = window.document().context("Unable to load `document`")?;
    document
        .get_element_by_id(id)
        .context(format!("Element `{id}` not found"))
}

/// Blocking yes/no browser prompt.
pub fn confirm_dialog(message: &str) -> Result<bool> {
    let window = web_sys::window().context("Unable to load `window`")?;
    Ok(window
        .confirm_with_message(message)
        .map_err(|err| JsError::try_from(err).unwrap())?)
}

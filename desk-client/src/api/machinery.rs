//! Machinery and machine usage API

use crate::{ClientResult, HttpClient};
use shared::models::{MachineRecord, MachineRecordCreate, Machinery, MachineryCreate};
use shared::response::{ListResponse, MutationResponse};

pub async fn list_machines<C: HttpClient>(client: &C) -> ClientResult<Vec<Machinery>> {
    let resp: ListResponse<Machinery> = client.get("machine/list").await?;
    Ok(resp.data)
}

pub async fn create_machine<C: HttpClient>(
    client: &C,
    machine: &MachineryCreate,
) -> ClientResult<MutationResponse> {
    machine.validate()?;
    client.post("machine/add", machine).await
}

pub async fn list_records<C: HttpClient>(client: &C) -> ClientResult<Vec<MachineRecord>> {
    let resp: ListResponse<MachineRecord> = client.get("machine/record/list").await?;
    Ok(resp.data)
}

pub async fn create_record<C: HttpClient>(
    client: &C,
    record: &MachineRecordCreate,
) -> ClientResult<MutationResponse> {
    record.validate()?;
    tracing::debug!(
        machinery_id = record.machinery_id,
        hours = %record.total_hours,
        "Logging machine usage"
    );
    client.post("machine/record/add", record).await
}

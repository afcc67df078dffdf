use talent_api::{Client, Request, TalentApiError};

#[tokio::main]
pub async fn main() -> Result<(), TalentApiError> {
    let client = Client::default();

    let req = Request::talents().list();

    let talents = client.send(req).await?;
    for talent in talents {
        println!("{} ({} yrs, {})", talent.name, talent.years_experience, talent.primary_skill);
    }
    Ok(())
}

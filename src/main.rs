use critter_catchers::{
    BattleView, Game, GameConfig, GameNotification, GameResult, SaveStore,
};
use std::path::Path;

const CONFIG_PATH: &str = "critter_catchers.ron";
const ENCOUNTERS: usize = 5;

fn print_notifications<S: SaveStore>(game: &mut Game<S>) {
    for notification in game.drain_notifications() {
        if let GameNotification::Log(line) = notification {
            println!("  {}", line);
        }
    }
}

fn print_party<S: SaveStore>(game: &Game<S>) {
    println!("{}'s party:", game.player().name);
    for line in game.player().party_summary() {
        println!("  {}", line);
    }
}

/// Index of the hardest hitting move for the active critter.
fn strongest_move(view: &BattleView) -> usize {
    view.active
        .moves
        .iter()
        .enumerate()
        .max_by_key(|(_, m)| m.power())
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Plays one turn: throw an orb at a badly hurt wild, otherwise attack.
async fn play_turn<S: SaveStore>(game: &mut Game<S>, view: &BattleView) -> GameResult<()> {
    let result = if u32::from(view.wild.hp()) * 3 <= u32::from(view.wild.max_hp) {
        game.attempt_catch()?
    } else {
        game.use_move(strongest_move(view))?
    };
    print_notifications(game);

    if let Some(delay) = result.follow_up {
        tokio::time::sleep(delay).await;
        game.resolve_follow_up()?;
        print_notifications(game);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> GameResult<()> {
    println!("Critter Catchers");
    println!("================");

    let config = GameConfig::load(Path::new(CONFIG_PATH))?;
    let mut game = Game::from_config(config)?;
    print_party(&game);

    for encounter in 1..=ENCOUNTERS {
        println!("\n--- Exploring ({}/{}) ---", encounter, ENCOUNTERS);
        game.explore()?;
        print_notifications(&mut game);

        while let Some(view) = game.battle_view() {
            play_turn(&mut game, &view).await?;
        }

        if game.player().first_available().is_none() {
            game.heal_all();
            print_notifications(&mut game);
        }
    }

    println!();
    game.save();
    print_notifications(&mut game);
    print_party(&game);
    Ok(())
}

// Front desk: the interactive console session driving the booking registry
// Reads input like a console scanner (tokens for numbers, whole lines for names) and answers on any async writer

use std::{
    collections::{HashMap, VecDeque},
    io,
    str::FromStr,
};

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::{debug, info};

use crate::{
    billing::Bill,
    config::HotelConfig,
    error::{BookingError, DeskError},
    food::FoodOrder,
    guest::Guest,
    registry::BookingRegistry,
    room::RoomId,
    strategy::BookingStrategy,
};

const MENU: &str = "\n1. Book Room\n2. Book VIP Room\n3. Order Food\n4. Checkout\n5. Display All Room Details\n6. Display Available Rooms\n7. Exit\n";

#[derive(Error, Debug)]
enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("end of input")]
    Eof,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

struct Scanner<R> {
    lines: Lines<BufReader<R>>,
    pending: VecDeque<String>,
}

impl<R: AsyncRead + Unpin> Scanner<R> {
    fn new(input: R) -> Self {
        Self {
            lines: BufReader::new(input).lines(),
            pending: VecDeque::new(),
        }
    }

    async fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            match self.lines.next_line().await? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                None => return Err(InputError::Eof),
            }
        }
    }

    // Rest of the current line, or the next non-blank line when nothing is pending
    async fn next_line(&mut self) -> Result<String, InputError> {
        if !self.pending.is_empty() {
            let rest = self.pending.drain(..).collect::<Vec<_>>();
            return Ok(rest.join(" "));
        }

        loop {
            match self.lines.next_line().await? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(line.trim().to_string()),
                None => return Err(InputError::Eof),
            }
        }
    }

    async fn next_number<T: FromStr>(&mut self) -> Result<T, InputError> {
        let token = self.next_token().await?;
        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                // drop the rest of the line so the menu resyncs on the next one
                self.pending.clear();
                Err(InputError::InvalidNumber(token))
            }
        }
    }
}

// Outcome of a single menu round
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct FrontDesk {
    config: HotelConfig,
    registry: BookingRegistry,
    food_orders: HashMap<RoomId, FoodOrder>,
}

impl FrontDesk {
    pub fn new(config: HotelConfig) -> Self {
        Self {
            registry: BookingRegistry::new(config.num_rooms),
            config,
            food_orders: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &BookingRegistry {
        &self.registry
    }

    pub fn strategy_for(&self, room_id: RoomId) -> BookingStrategy {
        BookingStrategy::from(self.config.policy_for(room_id))
    }

    pub fn book(&mut self, room_id: RoomId, guest: Guest) -> Result<(), BookingError> {
        let strategy = self.strategy_for(room_id);
        self.registry.book_room(room_id, guest, &strategy)
    }

    // Books through the VIP policy whatever the room's configured binding
    pub fn book_vip(&mut self, room_id: RoomId, guest: Guest) -> Result<(), BookingError> {
        self.registry.book_room(room_id, guest, &BookingStrategy::vip())
    }

    pub fn order_food(
        &mut self,
        room_id: RoomId,
        item: &str,
        quantity: u32,
    ) -> Result<(), DeskError> {
        if self.registry.assignment(room_id).is_none() {
            return Err(BookingError::NoBookingFound(room_id).into());
        }

        self.food_orders
            .entry(room_id)
            .or_default()
            .add_item(item, quantity)?;
        debug!(room_id, item, quantity, "food ordered");
        Ok(())
    }

    pub fn food_order(&self, room_id: RoomId) -> Option<&FoodOrder> {
        self.food_orders.get(&room_id)
    }

    // Checks the room out and settles its food tab
    pub fn checkout(&mut self, room_id: RoomId) -> Result<Bill, BookingError> {
        let assignment = self.registry.checkout(room_id)?;
        let food_order = self.food_orders.remove(&room_id).unwrap_or_default();

        Ok(Bill::generate(
            &assignment.guest,
            self.config.room_charge,
            &food_order,
            self.config.food_service_charge,
        ))
    }

    /// Runs the numbered menu until the guest picks Exit or the input ends.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut scanner = Scanner::new(input);

        loop {
            output.write_all(MENU.as_bytes()).await?;
            output.write_all(b"Enter choice: ").await?;
            output.flush().await?;

            match self.round(&mut scanner, output).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(InputError::Eof) => break,
                Err(InputError::InvalidNumber(token)) => {
                    say(output, &format!("Invalid number: {token}")).await?;
                }
                Err(InputError::Io(err)) => return Err(err),
            }
        }

        say(output, "Exiting...").await?;
        info!("front desk closed");
        Ok(())
    }

    async fn round<R, W>(
        &mut self,
        scanner: &mut Scanner<R>,
        output: &mut W,
    ) -> Result<Flow, InputError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let choice = scanner.next_token().await?;

        match choice.as_str() {
            "1" | "2" => {
                say(output, "Enter name, age, contact number:").await?;
                let name = scanner.next_line().await?;
                let age = scanner.next_number::<u32>().await?;
                let contact = scanner.next_line().await?;
                say(output, "Enter room number:").await?;
                let room_id = scanner.next_number::<RoomId>().await?;

                let guest = Guest::new(name, age, contact);
                let msg = format!("Booking confirmed for {guest} in room {room_id}.");
                let res = if choice == "2" {
                    self.book_vip(room_id, guest)
                } else {
                    self.book(room_id, guest)
                };
                match res {
                    Ok(()) => say(output, &msg).await?,
                    Err(err) => say(output, &err.to_string()).await?,
                }
            }
            "3" => {
                say(output, "Enter room number, food item and quantity:").await?;
                let room_id = scanner.next_number::<RoomId>().await?;
                let item = scanner.next_token().await?;
                let quantity = scanner.next_number::<u32>().await?;

                match self.order_food(room_id, &item, quantity) {
                    Ok(()) => {
                        say(output, &format!("Added {item} x {quantity} to room {room_id}.")).await?
                    }
                    Err(err) => say(output, &err.to_string()).await?,
                }
            }
            "4" => {
                say(output, "Enter room number for checkout:").await?;
                let room_id = scanner.next_number::<RoomId>().await?;

                match self.checkout(room_id) {
                    Ok(bill) => {
                        say(output, &bill.to_string()).await?;
                        say(output, "Checked out successfully!").await?;
                    }
                    Err(err) => say(output, &err.to_string()).await?,
                }
            }
            "5" => {
                let mut text = String::from("\nRoom Details:");
                for room in self.registry.list_rooms() {
                    let status = if room.available { "Available" } else { "Booked" };
                    text.push_str(&format!("\nRoom {}: {status}", room.id));
                }
                say(output, &text).await?;
            }
            "6" => {
                let mut text = String::from("\nAvailable Rooms:");
                for room_id in self.registry.list_available() {
                    text.push_str(&format!("\nRoom {room_id}"));
                }
                say(output, &text).await?;
            }
            "7" => return Ok(Flow::Exit),
            _ => say(output, "Invalid choice!").await?,
        }

        Ok(Flow::Continue)
    }
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, msg: &str) -> io::Result<()> {
    output.write_all(msg.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
